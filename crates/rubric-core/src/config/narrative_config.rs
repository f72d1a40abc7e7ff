use serde::{Deserialize, Serialize};

use super::{check_bounds, defaults};
use crate::errors::ConfigError;

/// Word-count bounds on rationale text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Default: 200.
    pub min_words: usize,
    /// Default: 400.
    pub max_words: usize,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            min_words: defaults::DEFAULT_RATIONALE_MIN_WORDS,
            max_words: defaults::DEFAULT_RATIONALE_MAX_WORDS,
        }
    }
}

impl NarrativeConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_bounds(
            "narrative.min_words",
            self.min_words as f64,
            "narrative.max_words",
            self.max_words as f64,
        )
    }
}
