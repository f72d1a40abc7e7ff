use serde::{Deserialize, Serialize};

use super::{check_bounds, check_share, defaults};
use crate::constants::MAX_MEASURE_SCORE;
use crate::errors::ConfigError;

/// Population-level plausibility thresholds for the score distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    /// Lowest mean score considered plausible. Default: 1.5.
    pub mean_min: f64,
    /// Highest mean score considered plausible. Default: 4.0.
    pub mean_max: f64,
    /// Largest share of measures allowed at the extremes (0–1 or 4–5). Default: 0.6.
    pub extreme_share_max: f64,
    /// Scores at or above this paired with Low confidence are flagged. Default: 3.
    pub high_score_floor: u8,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            mean_min: defaults::DEFAULT_MEAN_MIN,
            mean_max: defaults::DEFAULT_MEAN_MAX,
            extreme_share_max: defaults::DEFAULT_EXTREME_SHARE_MAX,
            high_score_floor: defaults::DEFAULT_HIGH_SCORE_FLOOR,
        }
    }
}

impl DistributionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_bounds(
            "distribution.mean_min",
            self.mean_min,
            "distribution.mean_max",
            self.mean_max,
        )?;
        check_share("distribution.extreme_share_max", self.extreme_share_max)?;
        if i64::from(self.high_score_floor) > MAX_MEASURE_SCORE {
            return Err(ConfigError::InvalidValue {
                key: "distribution.high_score_floor".into(),
                reason: format!(
                    "{} exceeds the maximum measure score {MAX_MEASURE_SCORE}",
                    self.high_score_floor
                ),
            });
        }
        Ok(())
    }
}
