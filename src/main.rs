use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod gn;
mod tasks;
mod util;

fn main() -> Result<()> {
    env_logger::init();
    let cli = crate::cli::Cli::parse();
    crate::app::run(cli)
}
