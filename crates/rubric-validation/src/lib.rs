//! # rubric-validation
//!
//! Validation pipeline for completed assessment records.
//!
//! ## Checks
//! 1. **Structure**: measure count, id set, canonical names and categories,
//!    score range, confidence vocabulary. Gates everything else.
//! 2. **Evidence**: scores backed by evidence, evidence backed by sources,
//!    quote counts, cross-measure duplication, coverage.
//! 3. **Distribution**: mean score, extreme-score concentration, high scores
//!    held with low confidence.
//! 4. **Narrative**: rationale word counts.
//!
//! Structural and evidence failures reject the record. Everything else is
//! advisory. Accepted records get a derived `SummaryBlock`.

pub mod checks;
pub mod engine;
pub mod summary;

pub use engine::ValidationEngine;
