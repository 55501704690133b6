//! Logging utilities for the booking calendar.
//!
//! Calendar crates log through the `tracing` macros directly. This module only
//! owns subscriber installation so hosts and tests share one setup.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use bookcal_common::logging;
///
/// // Initialize with default log level (INFO)
/// logging::init();
///
/// // Later calls are ignored once a subscriber is installed
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are honoured in addition to the `bookcal` directive
/// built from `level`.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("bookcal={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    // try_init: a global default subscriber may already be set (tests, hosts)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Parse a level name from configuration, falling back to INFO.
pub fn parse_level(name: &str) -> Level {
    name.parse().unwrap_or(Level::INFO)
}

/// Log a degraded-but-safe fallback the host should know about.
///
/// Returns `value` unchanged so it can wrap the fallback expression.
pub fn log_fallback<T: std::fmt::Debug>(value: T, context: &str) -> T {
    tracing::warn!("{}: falling back to {:?}", context, value);
    value
}
