//! Evidence auditing: non-zero scores need evidence, evidence needs sources,
//! declared quote counts must match, and shared quotes are surfaced.
//!
//! Assumes the record passed structural validation.

use std::collections::HashMap;

use rubric_core::config::EvidenceConfig;
use rubric_core::models::{AssessmentRecord, FindingCode, ValidationFinding};

/// Longest quote excerpt echoed back in a finding message.
const QUOTE_EXCERPT_CHARS: usize = 80;

/// Result of evidence auditing.
#[derive(Debug, Clone)]
pub struct EvidenceAuditResult {
    /// Per-measure errors first, then advisory findings.
    pub findings: Vec<ValidationFinding>,
    /// Percent of measures with at least one non-blank evidence entry.
    pub coverage_percent: f64,
    /// Quotes cited under two or more measures, with the citing ids.
    pub shared_quotes: Vec<SharedQuote>,
}

/// One evidence string cited by several measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedQuote {
    pub quote: String,
    pub measure_ids: Vec<String>,
}

/// Audit evidence linkage across all measures.
pub fn audit(record: &AssessmentRecord, config: &EvidenceConfig) -> EvidenceAuditResult {
    let total = record.measures.len();
    let mut errors = Vec::new();
    let mut advisories = Vec::new();
    let mut with_evidence = 0usize;

    for measure in &record.measures {
        let id = measure.measure_id.as_str();
        let score = measure.valid_score().unwrap_or(0);
        let has_evidence = measure.has_evidence();
        if has_evidence {
            with_evidence += 1;
        }

        if score > 0 && !has_evidence {
            errors.push(
                ValidationFinding::new(
                    FindingCode::ScoreWithoutEvidence,
                    format!(
                        "score {score} has no supporting evidence; unevidenced measures must score 0"
                    ),
                )
                .for_measure(id),
            );
        }

        if has_evidence && !measure.source.iter().any(|s| !s.trim().is_empty()) {
            errors.push(
                ValidationFinding::new(
                    FindingCode::EvidenceWithoutSource,
                    format!(
                        "{} evidence entries but no source citation",
                        measure.evidence_segments().count()
                    ),
                )
                .for_measure(id),
            );
        }

        if i64::try_from(measure.evidence.len()) != Ok(measure.quote_count) {
            errors.push(
                ValidationFinding::new(
                    FindingCode::QuoteCountMismatch,
                    format!(
                        "quote_count is {} but {} evidence entries were supplied",
                        measure.quote_count,
                        measure.evidence.len()
                    ),
                )
                .for_measure(id),
            );
        }

        if score > 0 && has_evidence {
            let chars = measure.evidence_chars();
            if chars < config.weak_evidence_min_chars {
                advisories.push(
                    ValidationFinding::new(
                        FindingCode::WeakEvidence,
                        format!(
                            "score {score} rests on {chars} characters of evidence (fewer than {})",
                            config.weak_evidence_min_chars
                        ),
                    )
                    .for_measure(id),
                );
            }
        }
    }

    let shared_quotes = find_shared_quotes(record);
    for shared in &shared_quotes {
        advisories.push(duplication_finding(shared, total, config));
    }

    let coverage_percent = if total == 0 {
        0.0
    } else {
        with_evidence as f64 / total as f64 * 100.0
    };
    if coverage_percent < config.coverage_min_percent {
        advisories.push(ValidationFinding::new(
            FindingCode::LowEvidenceCoverage,
            format!(
                "evidence coverage is {coverage_percent:.1}% ({with_evidence} of {total} measures), below {:.1}%",
                config.coverage_min_percent
            ),
        ));
    }

    errors.extend(advisories);
    EvidenceAuditResult {
        findings: errors,
        coverage_percent,
        shared_quotes,
    }
}

/// Group identical evidence strings by the distinct measures citing them,
/// in order of first appearance.
fn find_shared_quotes(record: &AssessmentRecord) -> Vec<SharedQuote> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

    for measure in &record.measures {
        let id = measure.measure_id.as_str();
        for quote in measure.evidence_segments() {
            let slot = *index.entry(quote).or_insert_with(|| {
                groups.push((quote, Vec::new()));
                groups.len() - 1
            });
            let ids = &mut groups[slot].1;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(quote, ids)| SharedQuote {
            quote: quote.to_string(),
            measure_ids: ids.into_iter().map(String::from).collect(),
        })
        .collect()
}

fn duplication_finding(
    shared: &SharedQuote,
    total: usize,
    config: &EvidenceConfig,
) -> ValidationFinding {
    let mut message = format!(
        "identical evidence cited under {}: {:?}",
        shared.measure_ids.join(", "),
        excerpt(&shared.quote)
    );
    let share = if total == 0 {
        0.0
    } else {
        shared.measure_ids.len() as f64 / total as f64
    };
    if share > config.duplication_share_note {
        message.push_str(&format!(" (cited by {:.0}% of measures)", share * 100.0));
    }

    let mut ids = shared.measure_ids.iter().cloned();
    let first = ids.next().unwrap_or_default();
    ValidationFinding::new(FindingCode::DuplicateEvidence, message)
        .for_measure(first)
        .with_related(ids.collect())
}

fn excerpt(quote: &str) -> String {
    if quote.chars().count() <= QUOTE_EXCERPT_CHARS {
        return quote.to_string();
    }
    let mut cut: String = quote.chars().take(QUOTE_EXCERPT_CHARS).collect();
    cut.push_str("...");
    cut
}
