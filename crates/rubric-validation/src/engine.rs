//! ValidationEngine: runs the structural gate, then the independent checks,
//! classifies findings, and derives the summary for accepted records.
//!
//! Stateless per call. One engine can validate any number of records
//! concurrently; it holds only an immutable registry and config.

use std::sync::Arc;

use rayon::prelude::*;
use rubric_core::config::RubricConfig;
use rubric_core::constants::VERSION;
use rubric_core::errors::{RubricError, RubricResult};
use rubric_core::models::{
    AssessmentRecord, EnrichedAssessment, FindingCode, Severity, SummaryBlock,
    ValidationFinding, ValidationReport, ValidationState,
};
use rubric_core::registry::SchemaRegistry;
use rubric_core::traits::IAssessmentValidator;
use rubric_observability::tracing_setup::spans::names;
use rubric_observability::{batch_span, stage_span, validation_span};
use tracing::{debug, info, warn};

use crate::checks::{distribution, evidence, narrative, structure};
use crate::summary;

/// The validation pipeline bound to one registry version.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    registry: Arc<SchemaRegistry>,
    config: RubricConfig,
}

impl ValidationEngine {
    /// Build an engine, rejecting inconsistent thresholds up front.
    pub fn new(registry: Arc<SchemaRegistry>, config: RubricConfig) -> RubricResult<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// The built-in ProcessPrompt v2.2 registry with the given config.
    pub fn with_builtin_registry(config: RubricConfig) -> RubricResult<Self> {
        Self::new(Arc::new(SchemaRegistry::process_prompt_v2_2()), config)
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RubricConfig {
        &self.config
    }

    /// Validate one record.
    pub fn run(&self, record: &AssessmentRecord) -> RubricResult<ValidationReport> {
        let span = validation_span!(record.company.name, self.registry.version().label);
        let _guard = span.enter();

        let structure_result = {
            let _stage = stage_span!(names::STAGE_STRUCTURE).entered();
            structure::validate(record, &self.registry, &self.config.limits)
        };
        if !structure_result.passed() {
            warn!(
                submitted = structure_result.submitted,
                expected = structure_result.expected,
                errors = structure_result.findings.len(),
                "record rejected on structure"
            );
            return Ok(self.report(ValidationState::Rejected, structure_result.findings, None));
        }

        let (evidence_result, (distribution_result, narrative_result)) = rayon::join(
            || {
                let _stage = stage_span!(names::STAGE_EVIDENCE).entered();
                evidence::audit(record, &self.config.evidence)
            },
            || {
                rayon::join(
                    || {
                        let _stage = stage_span!(names::STAGE_DISTRIBUTION).entered();
                        distribution::analyze(record, &self.config.distribution)
                    },
                    || {
                        let _stage = stage_span!(names::STAGE_NARRATIVE).entered();
                        narrative::check(record, &self.config.narrative)
                    },
                )
            },
        );
        debug!(
            coverage = evidence_result.coverage_percent,
            shared_quotes = evidence_result.shared_quotes.len(),
            mean = distribution_result.mean,
            extreme_share = distribution_result.extreme_share,
            "post-structural checks complete"
        );

        let mut findings = evidence_result.findings;
        findings.extend(distribution_result.findings);
        findings.extend(narrative_result.findings);
        if let Some(finding) = self.summary_consistency(record) {
            findings.push(finding);
        }
        // Stable: errors before warnings, check order preserved within each.
        findings.sort_by_key(|f| f.severity);

        let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
        let state = if errors > 0 {
            ValidationState::Rejected
        } else if findings.is_empty() {
            ValidationState::Accepted
        } else {
            ValidationState::AcceptedWithWarnings
        };

        if state == ValidationState::Rejected {
            warn!(errors, "record rejected on evidence");
            return Ok(self.report(state, findings, None));
        }

        let summary = {
            let _stage = stage_span!(names::STAGE_SUMMARY).entered();
            summary::compute(record, &self.registry, &self.config.evidence)
        };
        if summary.confidence_distribution.total() != self.registry.len() {
            return Err(RubricError::InvariantViolation {
                details: format!(
                    "confidence distribution covers {} measures, registry has {}",
                    summary.confidence_distribution.total(),
                    self.registry.len()
                ),
            });
        }

        info!(
            state = ?state,
            warnings = findings.len(),
            total_score = summary.total_score,
            "record accepted"
        );
        Ok(self.report(state, findings, Some(summary)))
    }

    /// Validate and, unless rejected, attach the derived summary.
    pub fn finalize(
        &self,
        record: AssessmentRecord,
    ) -> RubricResult<(ValidationReport, Option<EnrichedAssessment>)> {
        let report = self.run(&record)?;
        let enriched = report.summary.clone().map(|summary| record.enrich(summary));
        Ok((report, enriched))
    }

    /// Validate many records on the rayon pool. Output order matches input.
    pub fn run_batch(&self, records: &[AssessmentRecord]) -> Vec<RubricResult<ValidationReport>> {
        let span = batch_span!(records.len());
        let _guard = span.enter();
        records.par_iter().map(|record| self.run(record)).collect()
    }

    /// Flag a producer-authored summary whose total disagrees with the scores.
    fn summary_consistency(&self, record: &AssessmentRecord) -> Option<ValidationFinding> {
        let claimed = record.submitted_total_score()?;
        let actual = summary::total_score(record);
        if (claimed - f64::from(actual)).abs() < f64::EPSILON {
            return None;
        }
        Some(ValidationFinding::new(
            FindingCode::SummaryMismatch,
            format!(
                "submitted summary claims total_score {claimed} but measures sum to {actual}; the submitted summary is discarded"
            ),
        ))
    }

    fn report(
        &self,
        state: ValidationState,
        findings: Vec<ValidationFinding>,
        summary: Option<SummaryBlock>,
    ) -> ValidationReport {
        ValidationReport {
            state,
            schema_version: self.registry.version().clone(),
            engine_version: VERSION.to_string(),
            findings,
            summary,
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self {
            registry: Arc::new(SchemaRegistry::process_prompt_v2_2()),
            config: RubricConfig::default(),
        }
    }
}

impl IAssessmentValidator for ValidationEngine {
    fn validate(&self, record: &AssessmentRecord) -> RubricResult<ValidationReport> {
        self.run(record)
    }
}
