use crate::cli::Scheme;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Remove the scheme's out-directory, if it exists.
pub fn run(root: &Path, scheme: Scheme) -> Result<()> {
    let out_dir = root.join(format!("out-{}", scheme.as_str()));
    if !out_dir.exists() {
        println!("Nothing to clean: {}", out_dir.display());
        return Ok(());
    }

    println!("Removing {}", out_dir.display());
    fs::remove_dir_all(&out_dir).with_context(|| format!("Removing {}", out_dir.display()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn removes_only_the_selected_scheme() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("out-debug/Windows-x64")).unwrap();
        fs::create_dir_all(root.join("out-release/Windows-x64")).unwrap();

        run(root, Scheme::Debug).unwrap();

        assert!(!root.join("out-debug").exists());
        assert!(root.join("out-release").exists());
    }

    #[test]
    fn missing_out_dir_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        run(tmp.path(), Scheme::Release).unwrap();
    }
}
