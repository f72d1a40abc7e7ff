//! Test fixture loader for rubric golden scenarios.
//!
//! Provides typed deserialization of fixture JSON files and helpers for
//! loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A golden validation scenario: edits applied to a conformant base record,
/// plus the outcome the engine must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    pub description: String,
    pub input: ScenarioInput,
    pub expected: ScenarioExpectation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScenarioInput {
    /// Score for every measure not overridden. Defaults to 2.
    pub default_score: Option<i64>,
    /// Leave every measure without evidence unless overridden.
    pub no_evidence: bool,
    /// Confidence label for every measure not overridden.
    pub default_confidence: Option<String>,
    pub overrides: Vec<MeasureOverride>,
    /// Ids removed from the base record.
    pub drop: Vec<String>,
    /// Ids whose measure is appended a second time.
    pub duplicate: Vec<String>,
    /// Opaque producer summary to attach.
    pub submitted_summary: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MeasureOverride {
    pub id: String,
    pub score: Option<serde_json::Value>,
    pub measure_name: Option<String>,
    pub category: Option<String>,
    pub confidence: Option<String>,
    pub evidence: Option<Vec<String>>,
    pub source: Option<Vec<String>>,
    pub quote_count: Option<i64>,
    pub rationale_words: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScenarioExpectation {
    /// `accepted`, `accepted_with_warnings`, or `rejected`.
    pub state: String,
    /// Codes that must appear.
    pub codes: Vec<String>,
    /// Codes that must not appear.
    pub absent_codes: Vec<String>,
    /// Measure ids that must be named by a finding with the paired code.
    pub named: Vec<NamedFinding>,
    pub total_score: Option<u32>,
    pub score_percentage: Option<f64>,
    pub evidence_coverage: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedFinding {
    pub code: String,
    pub measure_ids: Vec<String>,
}

/// Load every golden scenario under `golden/`.
pub fn load_golden_scenarios() -> Vec<(PathBuf, GoldenScenario)> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let relative = format!(
                "golden/{}",
                path.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
            );
            let scenario = load_fixture(&relative);
            (path, scenario)
        })
        .collect()
}
