use anyhow::{bail, Context, Result};
use std::process::Command;

/// Run a command with inherited stdio, failing on a non-zero exit.
pub fn run_cmd(cmd: &mut Command) -> Result<()> {
    log::debug!("running {cmd:?}");
    let status = cmd
        .status()
        .with_context(|| format!("Spawning {:?}", cmd.get_program()))?;
    if !status.success() {
        bail!("{:?} exited with status {}", cmd.get_program(), status);
    }
    Ok(())
}
