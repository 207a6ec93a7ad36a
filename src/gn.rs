//! GN argument assembly for the Windows x64 libwebrtc build.

use crate::cli::Scheme;

/// Arguments common to both schemes. The scheme only adds `is_debug=`.
const GN_ARGS: &[&str] = &[
    "target_os=\"win\"",
    "target_cpu=\"x64\"",
    "is_component_build=false",
    "rtc_use_h264=true",
    "rtc_enable_win_wgc=true",
    "use_lld=false",
    "use_custom_libcxx=false",
    "ffmpeg_branding=\"Chrome\"",
    "is_clang=true",
    "treat_warnings_as_errors=false",
    "rtc_include_tests=false",
    "rtc_build_examples=false",
];

/// Full argument list for a scheme: the static table plus `is_debug=`.
pub fn args(scheme: Scheme) -> Vec<&'static str> {
    let mut args = GN_ARGS.to_vec();
    args.push(match scheme {
        Scheme::Debug => "is_debug=true",
        Scheme::Release => "is_debug=false",
    });
    args
}

/// The `--args=` value gn expects: all flags joined by single spaces.
pub fn flatten(scheme: Scheme) -> String {
    args(scheme).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_sets_is_debug_true() {
        let flat = flatten(Scheme::Debug);
        assert!(flat.contains("is_debug=true"));
        assert!(!flat.contains("is_debug=false"));
    }

    #[test]
    fn release_sets_is_debug_false() {
        let flat = flatten(Scheme::Release);
        assert!(flat.contains("is_debug=false"));
        assert!(!flat.contains("is_debug=true"));
    }

    #[test]
    fn exactly_one_is_debug_flag() {
        for scheme in [Scheme::Debug, Scheme::Release] {
            let count = args(scheme)
                .iter()
                .filter(|a| a.starts_with("is_debug="))
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn static_table_is_scheme_independent() {
        let debug = args(Scheme::Debug);
        let release = args(Scheme::Release);
        assert_eq!(debug[..debug.len() - 1], release[..release.len() - 1]);
    }

    #[test]
    fn targets_windows_x64() {
        let flat = flatten(Scheme::Debug);
        assert!(flat.contains("target_os=\"win\""));
        assert!(flat.contains("target_cpu=\"x64\""));
    }
}
