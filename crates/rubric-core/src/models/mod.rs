mod assessment;
mod finding;
mod report;
mod summary;

pub use assessment::{
    AssessmentRecord, CompanyInfo, Confidence, EnrichedAssessment, MeasureRecord, SubmittedScore,
};
pub use finding::{FindingClass, FindingCode, Severity, ValidationFinding};
pub use report::{ValidationReport, ValidationState};
pub use summary::{CategoryScore, ConfidenceDistribution, RiskRating, SummaryBlock};
