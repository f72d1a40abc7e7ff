//! Tracing setup: structured logging with span definitions.

pub mod spans;

use rubric_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for filter directives.
pub const LOG_ENV_VAR: &str = "RUBRIC_LOG";

/// Install the global subscriber from config.
///
/// `RUBRIC_LOG` overrides `config.log_level` when set and parseable.
/// Returns `false` if a global subscriber was already installed, so callers
/// embedding the engine in a host that owns logging can call this blindly.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs)
}

/// Install the global subscriber with an explicit filter (tests, embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) -> bool {
    install(EnvFilter::new(filter), json)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
