//! Logging infrastructure for HomeGym.
//!
//! Diagnostic logging goes through `tracing`; the engine's inference trace
//! is returned as data and is not routed here.

use tracing_subscriber::EnvFilter;

/// Initialize logging with sensible defaults
///
/// Default level is WARN so CLI output stays clean; override with the
/// RUST_LOG environment variable.
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with a specific default level
///
/// RUST_LOG still takes precedence when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();
}
