//! Host `tracing` subscriber setup.
//!
//! Development gets human-readable output with RFC 3339 timestamps and source
//! locations; every other environment gets one JSON object per line. Output
//! goes to stderr so it never interleaves with data a tool writes to stdout.
//! Pair it with [`TracingSink`](crate::sink::TracingSink) to route redacted
//! entries through the same pipeline.

use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggerConfig;
use crate::error::{LoggerError, Result};

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(config: &LoggerConfig) -> &'static str {
    if config.is_development() {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LoggerConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let installed = if config.is_development() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(std::io::stderr)
                    .json()
                    .flatten_event(true),
            )
            .try_init()
    };

    installed.map_err(|e| LoggerError::Subscriber(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_environment() {
        assert_eq!(default_directive(&LoggerConfig::default()), "info");
        assert_eq!(default_directive(&LoggerConfig::development()), "debug");
    }
}
