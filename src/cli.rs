use clap::Parser;

/// Command line interface for the build-time stamper.
///
/// The tool takes no flags and no arguments: the output path and macro name
/// are fixed by contract with the firmware sources that include the header.
/// clap contributes only `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "buildstamp",
    version = version_with_build_time(),
    about = "Stamp the current Unix time into include/build_time.h"
)]
pub struct Cli {}

/// Returns version string with relative build time (e.g., "0.1.0 (built 5m ago)")
fn version_with_build_time() -> &'static str {
    use std::sync::OnceLock;
    static VERSION: OnceLock<String> = OnceLock::new();

    // Include the generated epoch file to force recompilation when it changes
    const BUILD_EPOCH_STR: &str = include_str!(concat!(env!("OUT_DIR"), "/build_epoch.txt"));

    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let build_epoch: u64 = BUILD_EPOCH_STR.trim().parse().unwrap_or(0);

        if build_epoch == 0 {
            return version.to_string();
        }

        let elapsed = crate::stamp::unix_seconds().saturating_sub(build_epoch);
        format!("{version} (built {})", format_relative_time(elapsed))
    })
}

fn format_relative_time(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_time_buckets() {
        assert_eq!(format_relative_time(0), "0s ago");
        assert_eq!(format_relative_time(59), "59s ago");
        assert_eq!(format_relative_time(60), "1m ago");
        assert_eq!(format_relative_time(7200), "2h ago");
        assert_eq!(format_relative_time(172800), "2d ago");
    }

    #[test]
    fn cli_accepts_no_arguments() {
        Cli::try_parse_from(["buildstamp"]).expect("bare invocation should parse");
        assert!(
            Cli::try_parse_from(["buildstamp", "--bogus"]).is_err(),
            "unknown flags should be rejected"
        );
    }
}
