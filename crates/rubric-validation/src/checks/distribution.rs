//! Population-level plausibility of the score distribution.
//!
//! Every finding here is a warning. A genuinely excellent or genuinely
//! silent company can produce any of these shapes; they are review prompts.

use rubric_core::config::DistributionConfig;
use rubric_core::models::{AssessmentRecord, Confidence, FindingCode, ValidationFinding};

/// Result of distribution analysis.
#[derive(Debug, Clone)]
pub struct DistributionAnalysisResult {
    pub findings: Vec<ValidationFinding>,
    pub mean: f64,
    /// Share of measures scored 0–1 or 4–5.
    pub extreme_share: f64,
}

/// Analyze the score distribution of a structurally valid record.
pub fn analyze(
    record: &AssessmentRecord,
    config: &DistributionConfig,
) -> DistributionAnalysisResult {
    let scores: Vec<u8> = record
        .measures
        .iter()
        .map(|m| m.valid_score().unwrap_or(0))
        .collect();
    let mut findings = Vec::new();

    if scores.is_empty() {
        return DistributionAnalysisResult {
            findings,
            mean: 0.0,
            extreme_share: 0.0,
        };
    }

    let n = scores.len() as f64;
    let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / n;
    if mean < config.mean_min || mean > config.mean_max {
        findings.push(ValidationFinding::new(
            FindingCode::MeanScoreOutOfBounds,
            format!(
                "mean score {mean:.2} is outside the plausible range [{:.2}, {:.2}]",
                config.mean_min, config.mean_max
            ),
        ));
    }

    let extremes = scores.iter().filter(|&&s| s <= 1 || s >= 4).count();
    let extreme_share = extremes as f64 / n;
    if extreme_share > config.extreme_share_max {
        findings.push(ValidationFinding::new(
            FindingCode::ExtremeScoreConcentration,
            format!(
                "{extremes} of {} scores sit at the extremes (0-1 or 4-5), {:.0}% against a limit of {:.0}%",
                scores.len(),
                extreme_share * 100.0,
                config.extreme_share_max * 100.0
            ),
        ));
    }

    for measure in &record.measures {
        let score = measure.valid_score().unwrap_or(0);
        if score >= config.high_score_floor && measure.confidence_level() == Some(Confidence::Low) {
            findings.push(
                ValidationFinding::new(
                    FindingCode::HighScoreLowConfidence,
                    format!("score {score} is held with Low confidence"),
                )
                .for_measure(measure.measure_id.as_str()),
            );
        }
    }

    DistributionAnalysisResult {
        findings,
        mean,
        extreme_share,
    }
}
