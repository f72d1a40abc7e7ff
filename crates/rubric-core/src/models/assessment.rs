use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SummaryBlock;
use crate::constants::{MAX_MEASURE_SCORE, MIN_MEASURE_SCORE};

/// Company-identifying metadata. Passed through without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    /// Any other producer-supplied keys, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A candidate assessment as produced by the evidence-gathering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub company: CompanyInfo,
    pub measures: Vec<MeasureRecord>,
    /// Summary supplied by the producer, if any. Never trusted: the engine
    /// recomputes the summary on every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<serde_json::Value>,
}

impl AssessmentRecord {
    /// `total_score` claimed by a submitted summary, when present and numeric.
    pub fn submitted_total_score(&self) -> Option<f64> {
        self.summary.as_ref()?.get("total_score")?.as_f64()
    }

    /// Replace any submitted summary with the derived one.
    pub fn enrich(self, summary: SummaryBlock) -> EnrichedAssessment {
        EnrichedAssessment {
            company: self.company,
            measures: self.measures,
            summary,
        }
    }
}

/// An accepted record with its derived summary attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedAssessment {
    pub company: CompanyInfo,
    pub measures: Vec<MeasureRecord>,
    pub summary: SummaryBlock,
}

/// One submitted measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureRecord {
    pub measure_id: String,
    pub measure_name: String,
    pub category: String,
    pub score: SubmittedScore,
    /// Expected to be one of `High`, `Medium`, `Low`; checked, not parsed.
    pub confidence: String,
    #[serde(default)]
    pub rationale: String,
    /// Verbatim excerpts, in order.
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Citations aligned with `evidence`.
    #[serde(default)]
    pub source: Vec<String>,
    /// Declared number of evidence entries; checked, not trusted.
    #[serde(default)]
    pub quote_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
}

impl MeasureRecord {
    /// Evidence entries that carry text.
    pub fn evidence_segments(&self) -> impl Iterator<Item = &str> {
        self.evidence
            .iter()
            .map(String::as_str)
            .filter(|e| !e.trim().is_empty())
    }

    pub fn has_evidence(&self) -> bool {
        self.evidence_segments().next().is_some()
    }

    /// Combined length, in characters, of the trimmed evidence text.
    pub fn evidence_chars(&self) -> usize {
        self.evidence_segments()
            .map(|e| e.trim().chars().count())
            .sum()
    }

    pub fn confidence_level(&self) -> Option<Confidence> {
        self.confidence.parse().ok()
    }

    /// The score, if it is an in-range integer.
    pub fn valid_score(&self) -> Option<u8> {
        self.score.as_valid()
    }
}

/// A score exactly as submitted. Anything but an integer in [0, 5] is
/// reported, never coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedScore {
    Integer(i64),
    /// Integers above `i64::MAX`; always out of range.
    Unsigned(u64),
    Fractional(f64),
    Text(String),
}

impl SubmittedScore {
    pub fn as_valid(&self) -> Option<u8> {
        match self {
            Self::Integer(v) if (MIN_MEASURE_SCORE..=MAX_MEASURE_SCORE).contains(v) => {
                u8::try_from(*v).ok()
            }
            _ => None,
        }
    }
}

impl From<u8> for SubmittedScore {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl fmt::Display for SubmittedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Fractional(v) => write!(f, "{v:?}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}

/// Strength of evidentiary support for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const ALL: [Confidence; 3] = [Confidence::High, Confidence::Medium, Confidence::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;

    /// Exact match only: `"high"` and `" High"` are not labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
