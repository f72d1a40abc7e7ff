use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::MeasureId;
use crate::constants::MAX_MEASURE_SCORE;

/// Canonical definition of one measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasureDefinition {
    pub id: MeasureId,
    pub canonical_name: String,
    pub canonical_category: String,
}

/// A category and the contiguous, inclusive id range it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryDefinition {
    pub name: String,
    pub first: MeasureId,
    pub last: MeasureId,
}

impl CategoryDefinition {
    pub fn contains(&self, id: MeasureId) -> bool {
        self.first <= id && id <= self.last
    }

    /// Number of measures in the range.
    pub fn measure_count(&self) -> usize {
        usize::from(self.last.ordinal() - self.first.ordinal()) + 1
    }

    /// Highest attainable category score.
    pub fn max_score(&self) -> u32 {
        self.measure_count() as u32 * MAX_MEASURE_SCORE as u32
    }
}

/// Identity of a registry: a human label plus a content fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SchemaVersion {
    pub label: String,
    /// blake3 hex digest over the canonical category and measure rows.
    pub fingerprint: String,
}

/// Serialized form of a registry, as loaded from a versioned artifact.
///
/// Ids are kept as text so malformed entries surface as `RegistryError`s
/// rather than deserialization failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDefinition {
    pub label: String,
    pub categories: Vec<CategoryEntry>,
    pub measures: Vec<MeasureEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureEntry {
    pub id: String,
    pub name: String,
    pub category: String,
}
