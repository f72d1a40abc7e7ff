/// Configuration errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("inconsistent bounds {min_key}={min} > {max_key}={max}")]
    InvertedBounds {
        min_key: String,
        min: f64,
        max_key: String,
        max: f64,
    },
}
