//! Artifact staging: copy the build products (and optionally the
//! include/src trees) into a distribution directory.

use crate::cli::Scheme;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The files ninja leaves in the output directory that make up a release.
const ARTIFACTS: &[&str] = &["libwebrtc.dll", "libwebrtc.dll.lib", "libwebrtc.dll.pdb"];

/// Directories mirrored from `<checkout>/libwebrtc/` when header/source
/// staging is enabled.
const SOURCE_TREES: &[&str] = &["include", "src"];

pub fn run(root: &Path, scheme: Scheme, output_path: &Path, copy_headers: bool) -> Result<()> {
    println!("Copying build output to {}", output_path.display());

    if copy_headers {
        stage_source_trees(root, output_path)?;
    }

    let lib_path = crate::util::repo::output_path(root, scheme);
    let dst_lib_path = output_path.join("lib").join(scheme.lib_dir());
    fs::create_dir_all(&dst_lib_path)
        .with_context(|| format!("Creating {}", dst_lib_path.display()))?;

    for artifact in ARTIFACTS {
        let src = lib_path.join(artifact);
        let dst = dst_lib_path.join(artifact);
        fs::copy(&src, &dst)
            .with_context(|| format!("Copying {} to {}", src.display(), dst.display()))?;
        println!("  Copied {artifact}");
    }

    Ok(())
}

/// Replace `<dest>/include` and `<dest>/src` with fresh copies of the
/// checkout's trees. Pre-existing destination trees are removed first so
/// no stale files survive.
fn stage_source_trees(root: &Path, output_path: &Path) -> Result<()> {
    let libwebrtc = crate::util::repo::libwebrtc_path(root);

    for tree in SOURCE_TREES {
        let src = libwebrtc.join(tree);
        let dst = output_path.join(tree);

        if dst.exists() {
            fs::remove_dir_all(&dst).with_context(|| format!("Removing {}", dst.display()))?;
        }
        copy_tree(&src, &dst)
            .with_context(|| format!("Copying {} to {}", src.display(), dst.display()))?;
    }

    Ok(())
}

/// Recursively copy a directory tree. Symlinks are followed; the build
/// trees staged here do not contain any.
fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).with_context(|| format!("Creating {}", dst.display()))?;

    for entry in fs::read_dir(src).with_context(|| format!("Reading {}", src.display()))? {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_tree(&path, &target)?;
        } else {
            fs::copy(&path, &target)
                .with_context(|| format!("Copying {} to {}", path.display(), target.display()))?;
        }
    }

    Ok(())
}
