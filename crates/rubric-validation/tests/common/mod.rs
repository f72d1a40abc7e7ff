//! Record builders shared by the integration tests.
#![allow(dead_code)]

use rubric_core::models::{AssessmentRecord, CompanyInfo, MeasureRecord, SubmittedScore};
use rubric_core::registry::{MeasureDefinition, SchemaRegistry};
use test_fixtures::{MeasureOverride, ScenarioInput};

const FILLER: [&str; 12] = [
    "the", "company", "discloses", "board", "review", "of", "flood", "and", "heat", "exposure",
    "across", "sites",
];

/// A rationale of exactly `words` words.
pub fn rationale(words: usize) -> String {
    (0..words)
        .map(|i| FILLER[i % FILLER.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Distinct evidence text, comfortably above the weak-evidence threshold.
pub fn evidence_for(id: &str) -> String {
    format!(
        "{id}: the 2023 annual report describes a documented programme \
         for this practice across all operating sites."
    )
}

pub fn source_for(id: &str) -> String {
    format!("Annual Report 2023, section {id}")
}

/// A conformant measure with one piece of cited evidence.
pub fn measure(def: &MeasureDefinition, score: u8, confidence: &str) -> MeasureRecord {
    let id = def.id.to_string();
    MeasureRecord {
        measure_id: id.clone(),
        measure_name: def.canonical_name.clone(),
        category: def.canonical_category.clone(),
        score: SubmittedScore::from(score),
        confidence: confidence.to_string(),
        rationale: rationale(250),
        evidence: vec![evidence_for(&id)],
        source: vec![source_for(&id)],
        quote_count: 1,
        ai_model: Some("test-model".to_string()),
    }
}

/// Drop evidence, sources, and the quote count from a measure.
pub fn strip_evidence(measure: &mut MeasureRecord) {
    measure.evidence.clear();
    measure.source.clear();
    measure.quote_count = 0;
}

pub fn company() -> CompanyInfo {
    CompanyInfo {
        name: "Acme Utilities plc".to_string(),
        isin: Some("GB0000000001".to_string()),
        sector: Some("Utilities".to_string()),
        country: Some("United Kingdom".to_string()),
        ..Default::default()
    }
}

/// Every registry measure with the same score and confidence.
pub fn uniform_record(registry: &SchemaRegistry, score: u8, confidence: &str) -> AssessmentRecord {
    AssessmentRecord {
        company: company(),
        measures: registry
            .definitions()
            .iter()
            .map(|def| measure(def, score, confidence))
            .collect(),
        summary: None,
    }
}

/// The baseline: all 44 measures scored 2, Medium confidence, cited evidence.
pub fn conformant_record() -> AssessmentRecord {
    uniform_record(&SchemaRegistry::process_prompt_v2_2(), 2, "Medium")
}

/// Record with the given score vector (length 44), evidence only where score > 0.
pub fn record_from_scores(scores: &[u8]) -> AssessmentRecord {
    let registry = SchemaRegistry::process_prompt_v2_2();
    let mut record = uniform_record(&registry, 0, "Medium");
    for (measure, &score) in record.measures.iter_mut().zip(scores) {
        measure.score = SubmittedScore::from(score);
        if score == 0 {
            strip_evidence(measure);
        }
    }
    record
}

pub fn measure_mut<'a>(record: &'a mut AssessmentRecord, id: &str) -> &'a mut MeasureRecord {
    record
        .measures
        .iter_mut()
        .find(|m| m.measure_id == id)
        .unwrap_or_else(|| panic!("no measure {id} in record"))
}

/// Build the record a golden scenario describes.
pub fn build_scenario(input: &ScenarioInput) -> AssessmentRecord {
    let registry = SchemaRegistry::process_prompt_v2_2();
    let score = input.default_score.unwrap_or(2) as u8;
    let confidence = input.default_confidence.as_deref().unwrap_or("Medium");
    let mut record = uniform_record(&registry, score, confidence);

    if input.no_evidence {
        record.measures.iter_mut().for_each(strip_evidence);
    }

    for edit in &input.overrides {
        apply_override(measure_mut(&mut record, &edit.id), edit);
    }

    record
        .measures
        .retain(|m| !input.drop.contains(&m.measure_id));

    for id in &input.duplicate {
        let copy = measure_mut(&mut record, id).clone();
        record.measures.push(copy);
    }

    record.summary = input.submitted_summary.clone();
    record
}

fn apply_override(measure: &mut MeasureRecord, edit: &MeasureOverride) {
    if let Some(score) = &edit.score {
        measure.score = serde_json::from_value(score.clone())
            .unwrap_or_else(|e| panic!("bad score override for {}: {e}", edit.id));
    }
    if let Some(name) = &edit.measure_name {
        measure.measure_name = name.clone();
    }
    if let Some(category) = &edit.category {
        measure.category = category.clone();
    }
    if let Some(confidence) = &edit.confidence {
        measure.confidence = confidence.clone();
    }
    if let Some(evidence) = &edit.evidence {
        measure.evidence = evidence.clone();
        measure.source = evidence.iter().map(|_| source_for(&edit.id)).collect();
        measure.quote_count = evidence.len() as i64;
    }
    if let Some(source) = &edit.source {
        measure.source = source.clone();
    }
    if let Some(quote_count) = edit.quote_count {
        measure.quote_count = quote_count;
    }
    if let Some(words) = edit.rationale_words {
        measure.rationale = rationale(words);
    }
}
