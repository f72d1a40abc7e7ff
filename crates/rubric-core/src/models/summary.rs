use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate statistics derived from an accepted record.
///
/// Always recomputed from the measures; never authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryBlock {
    pub total_score: u32,
    /// Highest attainable total (5 × measure count).
    pub max_score: u32,
    /// `total_score / max_score * 100`, two decimals.
    pub score_percentage: f64,
    /// `total_score / measure count`, two decimals.
    pub average_score: f64,
    /// Percent of measures with non-empty evidence, two decimals.
    pub evidence_coverage: f64,
    /// Measures scored above zero.
    pub measures_assessed: usize,
    pub confidence_distribution: ConfidenceDistribution,
    /// One entry per registry category, in registry order.
    pub category_scores: Vec<CategoryScore>,
    pub overall_risk_rating: RiskRating,
    /// Average rescaled to 0–10, one decimal.
    pub physical_risk_score: f64,
    /// Ids worth a second evidence pass: unscored or thinly evidenced.
    pub follow_up_measures: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ConfidenceDistribution {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
}

/// Coarse rating of physical-risk preparedness. Higher scores mean lower risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskRating {
    Low,
    Medium,
    High,
}
