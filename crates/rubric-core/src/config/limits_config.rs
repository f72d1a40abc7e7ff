use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Work bounds applied before any per-measure iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Submissions with more measures than this are rejected outright. Default: 256.
    pub max_submitted_measures: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_submitted_measures: defaults::DEFAULT_MAX_SUBMITTED_MEASURES,
        }
    }
}

impl LimitsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_submitted_measures == 0 {
            return Err(ConfigError::InvalidValue {
                key: "limits.max_submitted_measures".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
