//! Logging infrastructure for doclookup.
//!
//! This module provides structured logging controlled by environment variables.
//!
//! # Environment Variables
//!
//! - `DOCLOOKUP_DEBUG=true` - Enable debug logging
//! - `DOCLOOKUP_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `DOCLOOKUP_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use doclookup_query::logging;
//!
//! // Initialize logging (call once at startup)
//! logging::init("info");
//! ```

use std::sync::Once;

use crate::env::{EnvSource, StdEnvSource};

static INIT: Once = Once::new();

/// Environment variable enabling debug logging.
pub const DEBUG_VAR: &str = "DOCLOOKUP_DEBUG";
/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "DOCLOOKUP_LOG_LEVEL";
/// Environment variable selecting the output format.
pub const LOG_FORMAT_VAR: &str = "DOCLOOKUP_LOG_FORMAT";

/// Check if debug logging is enabled.
///
/// Returns `true` if `DOCLOOKUP_DEBUG` is set to "true", "1", or "yes" (case-insensitive).
pub fn is_debug_enabled(env: &impl EnvSource) -> bool {
    env.get(DEBUG_VAR)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Resolve the log level.
///
/// `DOCLOOKUP_LOG_LEVEL` wins; otherwise debug when `DOCLOOKUP_DEBUG` is
/// enabled, otherwise `fallback`.
pub fn log_level(env: &impl EnvSource, fallback: &'static str) -> &'static str {
    let requested = env.get(LOG_LEVEL_VAR).map(|l| l.to_lowercase());
    match requested.as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ if is_debug_enabled(env) => "debug",
        _ => fallback,
    }
}

/// Resolve the log format. Defaults to "json" for structured logging.
pub fn log_format(env: &impl EnvSource) -> &'static str {
    env.get(LOG_FORMAT_VAR)
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize the logging system.
///
/// This should be called once at application startup. Subsequent calls are no-ops.
/// Log lines are written to stderr.
pub fn init(fallback_level: &'static str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let env = StdEnvSource;
            let level = log_level(&env, fallback_level);
            let filter = EnvFilter::try_new(format!(
                "doclookup={level},doclookup_query={level},doclookup_mongodb={level},\
                 doclookup_table={level},doclookup_axum={level},doclookup_cli={level},\
                 tower_http={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            match log_format(&env) {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().with_writer(std::io::stderr).json())
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().with_writer(std::io::stderr).compact())
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().with_writer(std::io::stderr).pretty())
                        .init();
                }
            }

            tracing::info!(
                level = level,
                format = log_format(&env),
                "doclookup logging initialized"
            );
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            let _ = (fallback_level, StdEnvSource);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvSource;

    #[test]
    fn test_debug_disabled_by_default() {
        assert!(!is_debug_enabled(&MapEnvSource::new()));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(&MapEnvSource::new(), "info"), "info");

        let env = MapEnvSource::new().set(DEBUG_VAR, "YES");
        assert_eq!(log_level(&env, "info"), "debug");

        let env = MapEnvSource::new()
            .set(DEBUG_VAR, "1")
            .set(LOG_LEVEL_VAR, "Error");
        assert_eq!(log_level(&env, "info"), "error");
    }

    #[test]
    fn test_log_format() {
        assert_eq!(log_format(&MapEnvSource::new()), "json");

        let env = MapEnvSource::new().set(LOG_FORMAT_VAR, "compact");
        assert_eq!(log_format(&env), "compact");

        let env = MapEnvSource::new().set(LOG_FORMAT_VAR, "xml");
        assert_eq!(log_format(&env), "json");
    }
}
