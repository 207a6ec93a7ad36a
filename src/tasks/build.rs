//! Compilation: `ninja -C <out>` against the generated build files.

use crate::cli::Scheme;
use anyhow::Result;
use std::path::Path;
use std::process::Command;

pub const NINJA: &str = "ninja";

pub fn run(root: &Path, scheme: Scheme) -> Result<()> {
    let out_path = crate::util::repo::output_path(root, scheme);

    crate::util::process::run_cmd(
        Command::new(NINJA)
            .current_dir(root)
            .arg("-C")
            .arg(&out_path),
    )
}
