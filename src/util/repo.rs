use crate::cli::Scheme;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Target platform directory name under `out-<scheme>/`. The build only
/// targets Windows x64; other platforms have their own build scripts.
pub const PLATFORM_TRIPLE: &str = "Windows-x64";

/// Default WebRTC checkout root: the directory this crate lives in.
pub fn checkout_root() -> Result<PathBuf> {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("libwebrtc-build is expected at <checkout>/build")
}

/// Build output directory for a scheme: `<root>/out-<scheme>/Windows-x64`.
///
/// Both gn gen and ninja must reference this same path.
pub fn output_path(root: &Path, scheme: Scheme) -> PathBuf {
    root.join(format!("out-{}", scheme.as_str()))
        .join(PLATFORM_TRIPLE)
}

/// The libwebrtc source tree inside the checkout.
pub fn libwebrtc_path(root: &Path) -> PathBuf {
    root.join("libwebrtc")
}
