mod common;

use rubric_core::config::LimitsConfig;
use rubric_core::models::{FindingCode, Severity, SubmittedScore};
use rubric_core::registry::SchemaRegistry;
use rubric_validation::checks::structure;

fn run(record: &rubric_core::AssessmentRecord) -> structure::StructureValidationResult {
    structure::validate(
        record,
        &SchemaRegistry::process_prompt_v2_2(),
        &LimitsConfig::default(),
    )
}

fn with_code(
    result: &structure::StructureValidationResult,
    code: FindingCode,
) -> Vec<&rubric_core::ValidationFinding> {
    result.findings.iter().filter(|f| f.code == code).collect()
}

#[test]
fn conformant_record_has_no_structural_findings() {
    let result = run(&common::conformant_record());
    assert!(result.passed(), "{:#?}", result.findings);
    assert_eq!(result.submitted, 44);
    assert_eq!(result.expected, 44);
}

#[test]
fn every_structural_finding_is_an_error() {
    let mut record = common::conformant_record();
    record.measures[0].measure_name = "Board oversight".into();
    record.measures[1].score = SubmittedScore::Integer(9);
    record.measures.remove(5);
    let result = run(&record);
    assert!(!result.findings.is_empty());
    assert!(result.findings.iter().all(|f| f.severity == Severity::Error));
}

#[test]
fn missing_m17_is_reported_once_by_id() {
    let mut record = common::conformant_record();
    record.measures.retain(|m| m.measure_id != "M17");
    let result = run(&record);

    let missing = with_code(&result, FindingCode::MissingMeasure);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].measure_id.as_deref(), Some("M17"));
    assert_eq!(with_code(&result, FindingCode::CountMismatch).len(), 1);
}

#[test]
fn two_measures_labelled_m05_are_duplicates() {
    let mut record = common::conformant_record();
    record.measures[5].measure_id = "M05".into();
    let result = run(&record);

    let dupes = with_code(&result, FindingCode::DuplicateMeasure);
    assert_eq!(dupes.len(), 1);
    assert_eq!(dupes[0].measure_id.as_deref(), Some("M05"));
    // M06 was relabelled, so it is now missing.
    let missing = with_code(&result, FindingCode::MissingMeasure);
    assert_eq!(missing[0].measure_id.as_deref(), Some("M06"));
    // 44 entries: count alone does not catch this.
    assert!(with_code(&result, FindingCode::CountMismatch).is_empty());
}

#[test]
fn foreign_and_malformed_ids_are_unexpected() {
    let mut record = common::conformant_record();
    record.measures[0].measure_id = "m01".into();
    let mut extra = record.measures[1].clone();
    extra.measure_id = "M45".into();
    record.measures.push(extra);

    let result = run(&record);
    let unexpected: Vec<_> = with_code(&result, FindingCode::UnexpectedMeasure)
        .iter()
        .map(|f| f.measure_id.clone().unwrap())
        .collect();
    assert_eq!(unexpected, vec!["m01".to_string(), "M45".to_string()]);
    let missing = with_code(&result, FindingCode::MissingMeasure);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].measure_id.as_deref(), Some("M01"));
}

#[test]
fn missing_and_extra_are_reported_separately() {
    let mut record = common::conformant_record();
    record.measures[43].measure_id = "M50".into();
    let result = run(&record);
    assert_eq!(with_code(&result, FindingCode::MissingMeasure).len(), 1);
    assert_eq!(with_code(&result, FindingCode::UnexpectedMeasure).len(), 1);
}

#[test]
fn name_mismatch_names_both_strings() {
    let mut record = common::conformant_record();
    record.measures[7].measure_name = "hazard identification".into();
    let result = run(&record);

    let mismatches = with_code(&result, FindingCode::NameMismatch);
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].measure_id.as_deref(), Some("M08"));
    assert!(mismatches[0].message.contains("\"hazard identification\""));
    assert!(mismatches[0].message.contains("\"Hazard Identification\""));
}

#[test]
fn whitespace_variants_are_not_forgiven() {
    for name in [" Hazard Identification", "Hazard Identification ", "Hazard  Identification"] {
        let mut record = common::conformant_record();
        record.measures[7].measure_name = name.into();
        assert!(!run(&record).passed(), "{name:?} should not match");
    }
}

#[test]
fn category_is_checked_against_registry_not_record() {
    let mut record = common::conformant_record();
    // Claims M17 belongs to the previous category.
    record.measures[16].category = "Risk Identification & Assessment".into();
    let result = run(&record);
    let mismatches = with_code(&result, FindingCode::CategoryMismatch);
    assert_eq!(mismatches.len(), 1);
    assert!(mismatches[0].message.contains("Asset Design & Resilience"));
}

#[test]
fn scores_outside_range_are_errors_not_clamped() {
    let mut record = common::conformant_record();
    record.measures[0].score = SubmittedScore::Integer(-1);
    record.measures[1].score = SubmittedScore::Integer(6);
    record.measures[2].score = SubmittedScore::Fractional(3.0);
    record.measures[3].score = SubmittedScore::Text("3".into());
    let result = run(&record);
    assert_eq!(with_code(&result, FindingCode::ScoreOutOfRange).len(), 2);
    assert_eq!(with_code(&result, FindingCode::NonIntegerScore).len(), 2);
}

#[test]
fn boundary_scores_are_valid() {
    let mut record = common::conformant_record();
    record.measures[0].score = SubmittedScore::Integer(0);
    record.measures[1].score = SubmittedScore::Integer(5);
    assert!(run(&record).passed());
}

#[test]
fn off_vocabulary_confidence_is_an_error() {
    let mut record = common::conformant_record();
    record.measures[3].confidence = "high".into();
    let result = run(&record);
    let invalid = with_code(&result, FindingCode::InvalidConfidence);
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].measure_id.as_deref(), Some("M04"));
}

#[test]
fn oversized_submission_short_circuits() {
    let mut record = common::conformant_record();
    let template = record.measures[0].clone();
    record.measures.extend(std::iter::repeat(template).take(300));

    let result = run(&record);
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].code, FindingCode::SubmissionTooLarge);
}

#[test]
fn structural_findings_follow_check_order() {
    let mut record = common::conformant_record();
    record.measures[2].score = SubmittedScore::Integer(7);
    record.measures.retain(|m| m.measure_id != "M40");
    let result = run(&record);
    let order: Vec<FindingCode> = result.findings.iter().map(|f| f.code).collect();
    assert_eq!(
        order,
        vec![
            FindingCode::CountMismatch,
            FindingCode::MissingMeasure,
            FindingCode::ScoreOutOfRange,
        ]
    );
}

#[test]
fn empty_submission_reports_every_missing_id() {
    let mut record = common::conformant_record();
    record.measures.clear();
    let result = run(&record);
    assert_eq!(with_code(&result, FindingCode::MissingMeasure).len(), 44);
}
