//! Telemetry helpers for applications embedding `chart-composer`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left
//! to the host. `init_default_tracing` is the opt-in shortcut.

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "CHART_COMPOSER_LOG";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is
/// enabled, filtered by `CHART_COMPOSER_LOG` (default `info`).
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
