use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether a finding blocks acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Which family of contract a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FindingClass {
    /// Shape of the record: ids, names, categories, score range.
    Structural,
    /// Scores backed by evidence, evidence backed by citations.
    Evidence,
    /// Plausibility signals for review. Never blocking.
    Advisory,
}

/// Stable machine-readable finding code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FindingCode {
    // Structural.
    SubmissionTooLarge,
    CountMismatch,
    MissingMeasure,
    UnexpectedMeasure,
    DuplicateMeasure,
    NameMismatch,
    CategoryMismatch,
    ScoreOutOfRange,
    NonIntegerScore,
    InvalidConfidence,
    // Evidence.
    ScoreWithoutEvidence,
    EvidenceWithoutSource,
    QuoteCountMismatch,
    // Advisory.
    DuplicateEvidence,
    LowEvidenceCoverage,
    WeakEvidence,
    MeanScoreOutOfBounds,
    ExtremeScoreConcentration,
    HighScoreLowConfidence,
    RationaleLength,
    SummaryMismatch,
}

impl FindingCode {
    pub fn class(self) -> FindingClass {
        use FindingCode::*;
        match self {
            SubmissionTooLarge | CountMismatch | MissingMeasure | UnexpectedMeasure
            | DuplicateMeasure | NameMismatch | CategoryMismatch | ScoreOutOfRange
            | NonIntegerScore | InvalidConfidence => FindingClass::Structural,
            ScoreWithoutEvidence | EvidenceWithoutSource | QuoteCountMismatch => {
                FindingClass::Evidence
            }
            DuplicateEvidence | LowEvidenceCoverage | WeakEvidence | MeanScoreOutOfBounds
            | ExtremeScoreConcentration | HighScoreLowConfidence | RationaleLength
            | SummaryMismatch => FindingClass::Advisory,
        }
    }

    pub fn severity(self) -> Severity {
        match self.class() {
            FindingClass::Structural | FindingClass::Evidence => Severity::Error,
            FindingClass::Advisory => Severity::Warning,
        }
    }

    pub fn as_str(self) -> &'static str {
        use FindingCode::*;
        match self {
            SubmissionTooLarge => "submission_too_large",
            CountMismatch => "count_mismatch",
            MissingMeasure => "missing_measure",
            UnexpectedMeasure => "unexpected_measure",
            DuplicateMeasure => "duplicate_measure",
            NameMismatch => "name_mismatch",
            CategoryMismatch => "category_mismatch",
            ScoreOutOfRange => "score_out_of_range",
            NonIntegerScore => "non_integer_score",
            InvalidConfidence => "invalid_confidence",
            ScoreWithoutEvidence => "score_without_evidence",
            EvidenceWithoutSource => "evidence_without_source",
            QuoteCountMismatch => "quote_count_mismatch",
            DuplicateEvidence => "duplicate_evidence",
            LowEvidenceCoverage => "low_evidence_coverage",
            WeakEvidence => "weak_evidence",
            MeanScoreOutOfBounds => "mean_score_out_of_bounds",
            ExtremeScoreConcentration => "extreme_score_concentration",
            HighScoreLowConfidence => "high_score_low_confidence",
            RationaleLength => "rationale_length",
            SummaryMismatch => "summary_mismatch",
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One itemized validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationFinding {
    pub severity: Severity,
    pub code: FindingCode,
    pub message: String,
    /// The measure id as submitted (it may itself be malformed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub measure_id: Option<String>,
    /// Other measures implicated by the same finding.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_measure_ids: Vec<String>,
}

impl ValidationFinding {
    /// Severity follows from the code; callers cannot downgrade an error.
    pub fn new(code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            measure_id: None,
            related_measure_ids: Vec::new(),
        }
    }

    pub fn for_measure(mut self, measure_id: impl Into<String>) -> Self {
        self.measure_id = Some(measure_id.into());
        self
    }

    pub fn with_related(mut self, ids: Vec<String>) -> Self {
        self.related_measure_ids = ids;
        self
    }

    pub fn class(&self) -> FindingClass {
        self.code.class()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.measure_id {
            Some(id) => write!(f, "{level}[{}] {id}: {}", self.code, self.message),
            None => write!(f, "{level}[{}] {}", self.code, self.message),
        }
    }
}
