use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{FindingCode, Severity, SummaryBlock, ValidationFinding};
use crate::registry::SchemaVersion;

/// Terminal pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    Accepted,
    AcceptedWithWarnings,
    Rejected,
}

/// Outcome of validating one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub state: ValidationState,
    /// Registry the record was checked against.
    pub schema_version: SchemaVersion,
    pub engine_version: String,
    /// Errors first, then warnings, each in check order.
    pub findings: Vec<ValidationFinding>,
    /// Present unless rejected.
    #[ts(optional)]
    pub summary: Option<SummaryBlock>,
}

impl ValidationReport {
    pub fn is_accepted(&self) -> bool {
        self.state != ValidationState::Rejected
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationFinding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn has_code(&self, code: FindingCode) -> bool {
        self.findings.iter().any(|f| f.code == code)
    }

    pub fn findings_with_code(
        &self,
        code: FindingCode,
    ) -> impl Iterator<Item = &ValidationFinding> {
        self.findings.iter().filter(move |f| f.code == code)
    }
}
