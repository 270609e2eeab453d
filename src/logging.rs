//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Picks the log filter with priority: CLI > `RUST_LOG` > default.
pub fn resolve_filter(cli: Option<String>) -> String {
    cli.or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Installs the global tracing subscriber.
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(
    filter: &str,
    format: LogFormat,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_filter_prefers_cli() {
        let filter = resolve_filter(Some("vitals=trace".to_string()));
        assert_eq!(filter, "vitals=trace");
    }

    // RUST_LOG is process-wide, so both fallbacks run in one test.
    #[test]
    fn test_resolve_filter_fallbacks() {
        std::env::set_var("RUST_LOG", "vitals=warn");
        assert_eq!(resolve_filter(None), "vitals=warn");
        assert_eq!(resolve_filter(Some("debug".to_string())), "debug");

        std::env::remove_var("RUST_LOG");
        assert_eq!(resolve_filter(None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_init_tracing_twice_fails() {
        // The first install may succeed or fail; the second never succeeds.
        let _ = init_tracing(DEFAULT_LOG_FILTER, LogFormat::Text);
        assert!(init_tracing(DEFAULT_LOG_FILTER, LogFormat::Json).is_err());
    }
}
