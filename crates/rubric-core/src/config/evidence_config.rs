use serde::{Deserialize, Serialize};

use super::{check_share, defaults};
use crate::errors::ConfigError;

/// Evidence auditing thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Evidence coverage (percent of measures with evidence) below which a
    /// warning is raised. Default: 60.0.
    pub coverage_min_percent: f64,
    /// Combined evidence text shorter than this backs a non-zero score only
    /// weakly. Default: 50.
    pub weak_evidence_min_chars: usize,
    /// Share of measures citing one quote above which the duplication warning
    /// calls out the spread. Default: 0.5.
    pub duplication_share_note: f64,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            coverage_min_percent: defaults::DEFAULT_COVERAGE_MIN_PERCENT,
            weak_evidence_min_chars: defaults::DEFAULT_WEAK_EVIDENCE_MIN_CHARS,
            duplication_share_note: defaults::DEFAULT_DUPLICATION_SHARE_NOTE,
        }
    }
}

impl EvidenceConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.coverage_min_percent) {
            return Err(ConfigError::InvalidValue {
                key: "evidence.coverage_min_percent".into(),
                reason: format!(
                    "percentage must be within [0, 100], got {}",
                    self.coverage_min_percent
                ),
            });
        }
        check_share("evidence.duplication_share_note", self.duplication_share_note)
    }
}
