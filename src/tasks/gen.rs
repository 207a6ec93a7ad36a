//! Build-file generation: `gn gen` with the full argument set.

use crate::cli::Scheme;
use anyhow::Result;
use std::path::Path;
use std::process::Command;

// GN ships as a batch wrapper in the Windows depot_tools.
#[cfg(windows)]
pub const GN: &str = "gn.bat";
#[cfg(not(windows))]
pub const GN: &str = "gn";

pub fn run(root: &Path, scheme: Scheme) -> Result<()> {
    let out_path = crate::util::repo::output_path(root, scheme);
    let flattened = crate::gn::flatten(scheme);

    println!("Checkout root: {}", root.display());
    println!("GN args: {flattened}");
    println!("Output path: {}", out_path.display());

    crate::util::process::run_cmd(
        Command::new(GN)
            .current_dir(root)
            .arg("gen")
            .arg(&out_path)
            .arg(format!("--args={flattened}"))
            .arg("--ide=vs"),
    )
}
