use anyhow::{bail, Result};
use std::path::Path;

/// Preflight check: external tools on PATH and the source trees in place.
pub fn run(root: &Path) -> Result<()> {
    let mut ok = true;

    for tool in [crate::tasks::gen::GN, crate::tasks::build::NINJA] {
        if which::which(tool).is_err() {
            eprintln!("[FAIL] missing `{tool}` in PATH");
            ok = false;
        } else {
            eprintln!("[OK] {tool}");
        }
    }

    let libwebrtc = crate::util::repo::libwebrtc_path(root);
    for d in [libwebrtc.join("include"), libwebrtc.join("src")] {
        if d.is_dir() {
            eprintln!("[OK] {}", d.display());
        } else {
            eprintln!("[FAIL] missing directory: {}", d.display());
            ok = false;
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
