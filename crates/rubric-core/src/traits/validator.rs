use crate::errors::RubricResult;
use crate::models::{AssessmentRecord, ValidationReport};

/// Whole-record validation against a measure registry.
pub trait IAssessmentValidator: Send + Sync {
    /// Validate a candidate record, returning every finding and, unless
    /// rejected, the derived summary.
    fn validate(&self, record: &AssessmentRecord) -> RubricResult<ValidationReport>;
}
