//! Derived summary for accepted records.
//!
//! A pure function of the measures' scores, confidences, and evidence:
//! the same record always yields the same block.

use rubric_core::config::EvidenceConfig;
use rubric_core::constants::{
    LOW_RISK_AVERAGE, MAX_MEASURE_SCORE, MEDIUM_RISK_AVERAGE, PHYSICAL_RISK_SCALE,
};
use rubric_core::models::{
    AssessmentRecord, CategoryScore, Confidence, ConfidenceDistribution, MeasureRecord,
    RiskRating, SummaryBlock,
};
use rubric_core::registry::SchemaRegistry;

/// Compute the summary for a structurally valid record.
pub fn compute(
    record: &AssessmentRecord,
    registry: &SchemaRegistry,
    evidence: &EvidenceConfig,
) -> SummaryBlock {
    let measure_count = registry.len();
    let max_score = registry.max_total_score();

    let total_score = total_score(record);
    let with_evidence = record.measures.iter().filter(|m| m.has_evidence()).count();
    let measures_assessed = record
        .measures
        .iter()
        .filter(|m| m.valid_score().unwrap_or(0) > 0)
        .count();

    let average = ratio(f64::from(total_score), measure_count as f64);

    SummaryBlock {
        total_score,
        max_score,
        score_percentage: round_to(ratio(f64::from(total_score), f64::from(max_score)) * 100.0, 2),
        average_score: round_to(average, 2),
        evidence_coverage: round_to(ratio(with_evidence as f64, measure_count as f64) * 100.0, 2),
        measures_assessed,
        confidence_distribution: confidence_distribution(record),
        category_scores: category_scores(record, registry),
        overall_risk_rating: risk_rating(average),
        physical_risk_score: round_to(
            average / MAX_MEASURE_SCORE as f64 * PHYSICAL_RISK_SCALE,
            1,
        ),
        follow_up_measures: follow_up_measures(record, evidence),
    }
}

/// Sum of valid scores.
pub fn total_score(record: &AssessmentRecord) -> u32 {
    record
        .measures
        .iter()
        .map(|m| u32::from(m.valid_score().unwrap_or(0)))
        .sum()
}

/// Rating from the unrounded average score.
pub fn risk_rating(average: f64) -> RiskRating {
    if average >= LOW_RISK_AVERAGE {
        RiskRating::Low
    } else if average >= MEDIUM_RISK_AVERAGE {
        RiskRating::Medium
    } else {
        RiskRating::High
    }
}

fn confidence_distribution(record: &AssessmentRecord) -> ConfidenceDistribution {
    let mut distribution = ConfidenceDistribution::default();
    for level in record.measures.iter().filter_map(MeasureRecord::confidence_level) {
        match level {
            Confidence::High => distribution.high += 1,
            Confidence::Medium => distribution.medium += 1,
            Confidence::Low => distribution.low += 1,
        }
    }
    distribution
}

fn category_scores(record: &AssessmentRecord, registry: &SchemaRegistry) -> Vec<CategoryScore> {
    registry
        .categories()
        .iter()
        .map(|category| {
            let score: u32 = record
                .measures
                .iter()
                .filter(|m| {
                    registry
                        .lookup_str(&m.measure_id)
                        .is_ok_and(|def| category.contains(def.id))
                })
                .map(|m| u32::from(m.valid_score().unwrap_or(0)))
                .sum();
            let max_score = category.max_score();
            CategoryScore {
                category: category.name.clone(),
                score,
                max_score,
                percentage: round_to(ratio(f64::from(score), f64::from(max_score)) * 100.0, 2),
            }
        })
        .collect()
}

/// Unscored or thinly evidenced measures, in submission order.
fn follow_up_measures(record: &AssessmentRecord, evidence: &EvidenceConfig) -> Vec<String> {
    record
        .measures
        .iter()
        .filter(|m| {
            m.valid_score().unwrap_or(0) == 0
                || m.evidence_chars() < evidence.weak_evidence_min_chars
        })
        .map(|m| m.measure_id.clone())
        .collect()
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
