//! Tracing setup: structured logging for the prediction engine.

pub mod events;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants::VERSION;

/// Build the env filter: `NUGGET_LOG` wins, otherwise the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env("NUGGET_LOG").unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Initialize the global subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = env_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_ok() {
        tracing::debug!(
            version = VERSION,
            log_level = %config.log_level,
            json = config.json_logs,
            "tracing initialized"
        );
    }
}
