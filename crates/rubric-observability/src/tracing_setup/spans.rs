//! Span definitions per operation: whole-record validation and each check stage.

/// Create a span covering one record's validation.
#[macro_export]
macro_rules! validation_span {
    ($company:expr, $schema:expr) => {
        tracing::info_span!("rubric.validation", company = %$company, schema = %$schema)
    };
}

/// Create a span for one check stage inside a validation run.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr) => {
        tracing::debug_span!("rubric.stage", stage = $stage)
    };
}

/// Create a span for a batch of validations.
#[macro_export]
macro_rules! batch_span {
    ($size:expr) => {
        tracing::info_span!("rubric.batch", size = $size)
    };
}

/// Span and stage names as constants for programmatic use.
pub mod names {
    pub const VALIDATION: &str = "rubric.validation";
    pub const STAGE: &str = "rubric.stage";
    pub const BATCH: &str = "rubric.batch";

    pub const STAGE_STRUCTURE: &str = "structure";
    pub const STAGE_EVIDENCE: &str = "evidence";
    pub const STAGE_DISTRIBUTION: &str = "distribution";
    pub const STAGE_NARRATIVE: &str = "narrative";
    pub const STAGE_SUMMARY: &str = "summary";
}
