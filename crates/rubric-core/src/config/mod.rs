//! Engine configuration.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields the
//! stock thresholds and partial documents override only what they name.

pub mod defaults;
mod distribution_config;
mod evidence_config;
mod limits_config;
mod narrative_config;
mod observability_config;

pub use distribution_config::DistributionConfig;
pub use evidence_config::EvidenceConfig;
pub use limits_config::LimitsConfig;
pub use narrative_config::NarrativeConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RubricResult};

/// Root configuration for the validation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RubricConfig {
    pub distribution: DistributionConfig,
    pub evidence: EvidenceConfig,
    pub narrative: NarrativeConfig,
    pub limits: LimitsConfig,
    pub observability: ObservabilityConfig,
}

impl RubricConfig {
    /// Parse a TOML document and check it for consistency.
    pub fn from_toml(source: &str) -> RubricResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject threshold combinations that cannot be satisfied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.distribution.validate()?;
        self.evidence.validate()?;
        self.narrative.validate()?;
        self.limits.validate()?;
        Ok(())
    }
}

pub(crate) fn check_share(key: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("share must be within [0, 1], got {value}"),
        });
    }
    Ok(())
}

pub(crate) fn check_bounds(
    min_key: &str,
    min: f64,
    max_key: &str,
    max: f64,
) -> Result<(), ConfigError> {
    for (key, value) in [(min_key, min), (max_key, max)] {
        if !value.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                reason: format!("bound must be a finite number, got {value}"),
            });
        }
    }
    if min > max {
        return Err(ConfigError::InvertedBounds {
            min_key: min_key.to_string(),
            min,
            max_key: max_key.to_string(),
            max,
        });
    }
    Ok(())
}
