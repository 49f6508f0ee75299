//! Structured logging for the voxcensus exporter.
//!
//! Provides structured, filterable logging via the `tracing` ecosystem:
//! console output with uptime timestamps and module paths, environment-based
//! filtering (respects RUST_LOG), and integration with the configuration
//! system for runtime log level control.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use voxcensus_config::Config;

/// Initialize the tracing subscriber for the exporter.
///
/// The filter resolves in priority order: the `RUST_LOG` environment
/// variable, then the config's `debug.log_level`, then `"info"`.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string (`info`).
///
/// Useful for testing and for consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        assert!(format!("{}", filter).contains("info"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,voxcensus_core=trace",
            "warn,voxcensus_world=debug",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }
}
