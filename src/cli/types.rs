use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Build scheme: selects the debug or optimized GN configuration and the
/// naming of the output/staging directories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    #[value(name = "debug")]
    Debug,
    #[value(name = "release")]
    Release,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    /// Staging subdirectory under `<output_path>/lib/`.
    pub fn lib_dir(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

#[derive(Parser)]
#[command(name = "libwebrtc-build")]
#[command(about = "Build the libwebrtc shared library for Windows x64 via gn + ninja")]
pub struct Cli {
    /// Scheme for building. Supported values: debug, release.
    #[arg(long, value_enum, default_value_t = Scheme::Debug)]
    pub scheme: Scheme,

    /// Run ninja file generation (gn gen) before building.
    #[arg(
        long = "gn_gen",
        default_value_t = true,
        action = ArgAction::Set,
        num_args(0..=1),
        default_missing_value = "true"
    )]
    pub gn_gen: bool,

    /// Path to copy the built libwebrtc artifacts to. Staging is skipped
    /// entirely when omitted.
    #[arg(long = "output_path")]
    pub output_path: Option<PathBuf>,

    /// Also stage the libwebrtc include/ and src/ trees into the output path.
    #[arg(long)]
    pub copy_headers: bool,

    /// WebRTC checkout root (the directory containing libwebrtc/ and out-*).
    /// Defaults to the parent of this crate's directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Check that gn, ninja, and the libwebrtc source trees are in place.
    Doctor,

    /// Remove the out-<scheme> build directory.
    Clean,
}
