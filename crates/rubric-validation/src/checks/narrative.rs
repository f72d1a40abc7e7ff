//! Rationale length bounds.

use rubric_core::config::NarrativeConfig;
use rubric_core::models::{AssessmentRecord, FindingCode, ValidationFinding};

/// Result of rationale length checking.
#[derive(Debug, Clone)]
pub struct NarrativeCheckResult {
    pub findings: Vec<ValidationFinding>,
    /// Word count per measure, in submission order.
    pub word_counts: Vec<usize>,
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Warn on every rationale outside the configured word bounds.
pub fn check(record: &AssessmentRecord, config: &NarrativeConfig) -> NarrativeCheckResult {
    let mut findings = Vec::new();
    let mut word_counts = Vec::with_capacity(record.measures.len());

    for measure in &record.measures {
        let words = word_count(&measure.rationale);
        word_counts.push(words);

        let problem = if words < config.min_words {
            "short"
        } else if words > config.max_words {
            "long"
        } else {
            continue;
        };
        findings.push(
            ValidationFinding::new(
                FindingCode::RationaleLength,
                format!(
                    "rationale too {problem}: {words} words (expected {} to {})",
                    config.min_words, config.max_words
                ),
            )
            .for_measure(measure.measure_id.as_str()),
        );
    }

    NarrativeCheckResult {
        findings,
        word_counts,
    }
}
