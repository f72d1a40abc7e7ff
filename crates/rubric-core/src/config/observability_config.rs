use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration consumed by `rubric-observability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level when `RUBRIC_LOG` is unset: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit newline-delimited JSON instead of the human format. Default: false.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
