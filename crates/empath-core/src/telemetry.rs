//! Tracing setup for binaries and tests.
//!
//! The library itself only emits `tracing` events (lexicon loads at `debug`,
//! per-sentence analysis at `trace`); wiring a subscriber is the caller's
//! choice. These helpers cover the common case.

use tracing_subscriber::{fmt, EnvFilter};

/// Guard returned by [`init_tracing`]; hold it for the process lifetime.
pub struct TelemetryGuard {
    _private: (),
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("shutting down telemetry");
    }
}

/// Initialize a fmt subscriber with the given filter directive.
///
/// Returns `None` if a global subscriber was already set, which makes the
/// call safe from multiple test binaries.
///
/// # Example
///
/// ```rust
/// let _guard = empath_core::telemetry::init_tracing("info");
/// ```
pub fn init_tracing(directive: &str) -> Option<TelemetryGuard> {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .ok()
        .map(|()| TelemetryGuard { _private: () })
}

/// Initialize tracing from the `EMPATH_LOG` environment variable.
///
/// Falls back to `info` when the variable is unset or invalid.
pub fn init_tracing_from_env() -> Option<TelemetryGuard> {
    let directive = std::env::var("EMPATH_LOG").unwrap_or_else(|_| "info".to_string());
    init_tracing(&directive)
}
