//! Logging setup for resq consumers.
//!
//! resq emits `tracing` events at `debug`/`trace` level from simplification
//! and dispatch. These helpers install a `tracing-subscriber` formatter when
//! the `logging` feature is enabled and are no-ops otherwise.

#[cfg(feature = "logging")]
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging at `info`, honoring `RUST_LOG` when set.
#[cfg(feature = "logging")]
pub fn init() {
    init_with_level("info");
}

/// Initialize logging at `level`, honoring `RUST_LOG` when set.
#[cfg(feature = "logging")]
pub fn init_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Initialize verbose logging routed through the test writer.
#[cfg(feature = "logging")]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("resq_core=trace"))
        .with_test_writer()
        .try_init();
}

#[cfg(not(feature = "logging"))]
pub const fn init() {}

#[cfg(not(feature = "logging"))]
pub const fn init_with_level(_level: &str) {}

#[cfg(not(feature = "logging"))]
pub const fn init_test() {}
