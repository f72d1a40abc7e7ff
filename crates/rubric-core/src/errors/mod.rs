//! Error types for the rubric engine.
//!
//! Validation *findings* are data carried by a `ValidationReport`; the errors
//! here only describe failures to build or run the engine itself.

mod config_error;
mod registry_error;

pub use config_error::ConfigError;
pub use registry_error::RegistryError;

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum RubricError {
    #[error("registry error: {0}")]
    RegistryError(#[from] RegistryError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("engine invariant violated: {details}")]
    InvariantViolation { details: String },
}

/// Convenience alias used across the workspace.
pub type RubricResult<T> = Result<T, RubricError>;
