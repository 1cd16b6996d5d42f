//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogFormat;

/// Filter used by `--verbose`.
const VERBOSE_FILTER: &str = "hello_handler=debug,tower_http=debug,info";

/// Build the log filter: `--verbose` wins, then `RUST_LOG`.
pub fn build_filter(rust_log: &str, verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_new(rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install the global subscriber. Call once, from `main`.
pub fn init_tracing(rust_log: &str, format: LogFormat, verbose: bool) {
    let filter = build_filter(rust_log, verbose);

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_rust_log() {
        let filter = build_filter("warn", true).to_string();
        assert!(filter.contains("hello_handler=debug"));
        assert!(!filter.contains("warn"));
    }

    #[test]
    fn invalid_directive_falls_back_to_info() {
        let filter = build_filter("hello_handler=loud", false).to_string();
        assert!(!filter.contains("hello_handler"));
    }
}
