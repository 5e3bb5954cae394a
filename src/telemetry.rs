//! Telemetry helpers for hosts embedding `trend-chart`.
//!
//! The engine only emits `tracing` events (render passes, frame scheduling,
//! pointer hit-tests, lifecycle). Installing a subscriber is left to the host;
//! the helpers here are a convenience for binaries and demos.

/// Filter used when `RUST_LOG` is unset. Per-frame `debug!`/`trace!` events
/// stay quiet unless asked for.
pub const DEFAULT_TRACING_FILTER: &str = "warn";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(None)
}

/// Like [`init_default_tracing`], but explicit `directives`
/// (e.g. `"trend_chart=trace"`) take precedence over `RUST_LOG`.
#[must_use]
pub fn init_tracing_with_filter(directives: Option<&str>) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match directives {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER)),
        };
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
