//! # rubric-core
//!
//! Foundation crate for the rubric validation engine.
//! Defines the measure registry, assessment/report types, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod registry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RubricConfig;
pub use errors::{RubricError, RubricResult};
pub use models::{
    AssessmentRecord, Confidence, MeasureRecord, Severity, SummaryBlock, ValidationFinding,
    ValidationReport, ValidationState,
};
pub use registry::{MeasureDefinition, MeasureId, SchemaRegistry};
