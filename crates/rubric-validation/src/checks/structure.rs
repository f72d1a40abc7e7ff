//! Structural conformance: the record has exactly the registry's measures,
//! under their canonical names and categories, with in-range integer scores.
//!
//! Names and categories are compared byte for byte. Near-misses such as a
//! trailing space or different casing are errors; comparable assessments
//! depend on a shared vocabulary.

use std::collections::{HashMap, HashSet};

use rubric_core::config::LimitsConfig;
use rubric_core::models::{
    AssessmentRecord, FindingCode, MeasureRecord, SubmittedScore, ValidationFinding,
};
use rubric_core::registry::SchemaRegistry;

/// Result of structural validation.
#[derive(Debug, Clone)]
pub struct StructureValidationResult {
    /// Every finding here is an error.
    pub findings: Vec<ValidationFinding>,
    pub submitted: usize,
    pub expected: usize,
}

impl StructureValidationResult {
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Validate the shape of a record against the registry.
pub fn validate(
    record: &AssessmentRecord,
    registry: &SchemaRegistry,
    limits: &LimitsConfig,
) -> StructureValidationResult {
    let submitted = record.measures.len();
    let expected = registry.len();
    let mut findings = Vec::new();

    if submitted > limits.max_submitted_measures {
        findings.push(ValidationFinding::new(
            FindingCode::SubmissionTooLarge,
            format!(
                "{submitted} measures submitted; refusing to inspect more than {}",
                limits.max_submitted_measures
            ),
        ));
        return StructureValidationResult {
            findings,
            submitted,
            expected,
        };
    }

    if submitted != expected {
        findings.push(ValidationFinding::new(
            FindingCode::CountMismatch,
            format!("expected {expected} measures, found {submitted}"),
        ));
    }

    // Occurrences per submitted id, keyed by the exact submitted text.
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for measure in &record.measures {
        let count = occurrences.entry(measure.measure_id.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(measure.measure_id.as_str());
        }
        *count += 1;
    }

    for definition in registry.definitions() {
        let id = definition.id.to_string();
        if !occurrences.contains_key(id.as_str()) {
            findings.push(
                ValidationFinding::new(
                    FindingCode::MissingMeasure,
                    format!("measure {id} ({}) is missing", definition.canonical_name),
                )
                .for_measure(id),
            );
        }
    }

    for &id in &first_seen {
        if registry.lookup_str(id).is_err() {
            findings.push(
                ValidationFinding::new(
                    FindingCode::UnexpectedMeasure,
                    format!("measure id {id:?} is not in registry {}", registry.version().label),
                )
                .for_measure(id),
            );
        }
    }

    for &id in &first_seen {
        let count = occurrences.get(id).copied().unwrap_or_default();
        if count > 1 {
            findings.push(
                ValidationFinding::new(
                    FindingCode::DuplicateMeasure,
                    format!("measure id {id:?} appears {count} times"),
                )
                .for_measure(id),
            );
        }
    }

    let mut reported_vocabulary: HashSet<(&str, FindingCode)> = HashSet::new();
    for measure in &record.measures {
        check_vocabulary(measure, registry, &mut reported_vocabulary, &mut findings);
        check_score(measure, &mut findings);
        check_confidence(measure, &mut findings);
    }

    StructureValidationResult {
        findings,
        submitted,
        expected,
    }
}

fn check_vocabulary<'a>(
    measure: &'a MeasureRecord,
    registry: &SchemaRegistry,
    reported: &mut HashSet<(&'a str, FindingCode)>,
    findings: &mut Vec<ValidationFinding>,
) {
    let Ok(definition) = registry.lookup_str(&measure.measure_id) else {
        return;
    };
    let id = measure.measure_id.as_str();

    if measure.measure_name != definition.canonical_name
        && reported.insert((id, FindingCode::NameMismatch))
    {
        findings.push(
            ValidationFinding::new(
                FindingCode::NameMismatch,
                format!(
                    "measure name {:?} does not match canonical name {:?}",
                    measure.measure_name, definition.canonical_name
                ),
            )
            .for_measure(id),
        );
    }

    if measure.category != definition.canonical_category
        && reported.insert((id, FindingCode::CategoryMismatch))
    {
        findings.push(
            ValidationFinding::new(
                FindingCode::CategoryMismatch,
                format!(
                    "category {:?} does not match canonical category {:?}",
                    measure.category, definition.canonical_category
                ),
            )
            .for_measure(id),
        );
    }
}

fn check_score(measure: &MeasureRecord, findings: &mut Vec<ValidationFinding>) {
    let finding = match &measure.score {
        SubmittedScore::Integer(_) if measure.valid_score().is_some() => return,
        SubmittedScore::Integer(_) | SubmittedScore::Unsigned(_) => ValidationFinding::new(
            FindingCode::ScoreOutOfRange,
            format!("score {} is outside [0, 5]", measure.score),
        ),
        other => ValidationFinding::new(
            FindingCode::NonIntegerScore,
            format!("score {other} is not an integer"),
        ),
    };
    findings.push(finding.for_measure(measure.measure_id.as_str()));
}

fn check_confidence(measure: &MeasureRecord, findings: &mut Vec<ValidationFinding>) {
    if measure.confidence_level().is_none() {
        findings.push(
            ValidationFinding::new(
                FindingCode::InvalidConfidence,
                format!(
                    "confidence {:?} is not one of \"High\", \"Medium\", \"Low\"",
                    measure.confidence
                ),
            )
            .for_measure(measure.measure_id.as_str()),
        );
    }
}
