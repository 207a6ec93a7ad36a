use anyhow::{Context, Result};

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    let root = match cli.root {
        Some(ref p) => p.clone(),
        None => crate::util::repo::checkout_root()?,
    };

    match cli.cmd {
        Some(crate::cli::Cmd::Doctor) => crate::tasks::doctor::run(&root),
        Some(crate::cli::Cmd::Clean) => crate::tasks::clean::run(&root, cli.scheme),
        None => build(&root, &cli),
    }
}

/// The main workflow: generate build files, build, then optionally stage.
fn build(root: &std::path::Path, cli: &crate::cli::Cli) -> Result<()> {
    if cli.gn_gen {
        crate::tasks::gen::run(root, cli.scheme).context("gn gen failed")?;
    }

    crate::tasks::build::run(root, cli.scheme).context("ninja build failed")?;

    if let Some(ref output_path) = cli.output_path {
        crate::tasks::stage::run(root, cli.scheme, output_path, cli.copy_headers)?;
    }

    println!("Done");
    Ok(())
}
