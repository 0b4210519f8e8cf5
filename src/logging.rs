//! Console log filtering.
//!
//! Maps `RUST_LOG`-style settings onto the log crate's level filters so
//! headless output honors the usual environment conventions.

use log::{Level, LevelFilter};
use std::env;

/// Display threshold for console events, read from `RUST_LOG`.
/// Defaults to `info` when unset or unparseable.
pub fn console_level() -> LevelFilter {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_level_filter(&rust_log)
}

pub fn parse_level_filter(rust_log: &str) -> LevelFilter {
    // Handle common RUST_LOG formats, including module-qualified ones.
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn should_log(event_level: Level, threshold: LevelFilter) -> bool {
    event_level <= threshold
}

pub fn should_log_with_env(event_level: Level) -> bool {
    should_log(event_level, console_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_filter() {
        assert_eq!(parse_level_filter("debug"), LevelFilter::Debug);
        assert_eq!(parse_level_filter("info"), LevelFilter::Info);
        assert_eq!(parse_level_filter("warn"), LevelFilter::Warn);
        assert_eq!(parse_level_filter("error"), LevelFilter::Error);
        assert_eq!(parse_level_filter("trace"), LevelFilter::Trace);
        assert_eq!(parse_level_filter("off"), LevelFilter::Off);

        // Module-specific formats
        assert_eq!(parse_level_filter("plantgen_cli=debug"), LevelFilter::Debug);
        assert_eq!(
            parse_level_filter("plantgen_cli=debug,hyper=info"),
            LevelFilter::Debug
        );

        // Default
        assert_eq!(parse_level_filter("nonsense"), LevelFilter::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(Level::Error, LevelFilter::Debug));
        assert!(should_log(Level::Warn, LevelFilter::Warn));
        assert!(!should_log(Level::Debug, LevelFilter::Error));
        assert!(!should_log(Level::Info, LevelFilter::Error));
        assert!(!should_log(Level::Error, LevelFilter::Off));
    }
}
