//! Tracing initialization.

use std::sync::Once;

use relnorm_core::config::ObservabilityConfig;
use relnorm_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging with default settings.
///
/// Reads the `RELNORM_LOG` environment variable, e.g. `RELNORM_LOG=relnorm_registry=debug`.
/// Falls back to `relnorm=info`. Idempotent.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize logging from config. `RELNORM_LOG` still takes precedence over
/// `log_filter`. Idempotent.
pub fn init_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
        install(filter, config.json);
    });
}

/// Initialize logging with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), false));
}

fn install(filter: EnvFilter, json: bool) {
    // try_init: the host application may already own a global subscriber.
    let result = if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true))
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("global tracing subscriber already installed");
    }
}
