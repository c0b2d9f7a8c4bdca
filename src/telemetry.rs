//! Telemetry helpers for hosts embedding the stack layout engine.
//!
//! The crate only emits `tracing` events; nothing is installed implicitly.
//! Hosts either call [`init_default_tracing`] or register their own subscriber.
//!
//! Events, by level:
//! - `warn`: a render pass was skipped because the chart state has no stack
//!   data for the series (`series`).
//! - `debug`: one event per render pass (`series`, `mode`, `categories`,
//!   `segments`, `omitted`, `connectors`), one when stack series data is built
//!   (`series_count`, `grouped`, `scale_type`) and one when the draw baseline
//!   is captured (`rect_count`, `connector_count`).
//! - `trace`: one event per segment omitted for lying outside the axis range
//!   (`data_index`, `series_index`, `stack_group_index`).
//!
//! `RUST_LOG=boxstack_rs=trace` shows every omitted segment.

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_TRACING_LEVEL: &str = "info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_LEVEL`].
///
/// Returns `true` when the subscriber was installed by this call, `false` when
/// the `telemetry` feature is disabled or a global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_LEVEL));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
