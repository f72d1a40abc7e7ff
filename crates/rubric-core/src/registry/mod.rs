//! The measure registry: canonical ids, names, and category assignment.
//!
//! A registry is an immutable value handed to the engine, never a global.
//! Several registries (schema versions) can be live at once; each carries a
//! `SchemaVersion` so reports can name the table they were checked against.

mod builtin;
mod definition;
mod measure_id;

pub use definition::{
    CategoryDefinition, CategoryEntry, MeasureDefinition, MeasureEntry, RegistryDefinition,
    SchemaVersion,
};
pub use measure_id::MeasureId;

use std::collections::HashSet;

use crate::constants::MAX_MEASURE_SCORE;
use crate::errors::{RegistryError, RubricResult};

/// Immutable table of measures and categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    version: SchemaVersion,
    categories: Vec<CategoryDefinition>,
    /// Dense: `measures[i].id` is `M{i+1:02}`.
    measures: Vec<MeasureDefinition>,
}

impl SchemaRegistry {
    /// The built-in ProcessPrompt v2.2 table.
    pub fn process_prompt_v2_2() -> Self {
        let categories: Vec<CategoryDefinition> = builtin::CATEGORIES
            .iter()
            .map(|&(name, first, last)| CategoryDefinition {
                name: name.to_string(),
                first: MeasureId::from_ordinal_unchecked(first),
                last: MeasureId::from_ordinal_unchecked(last),
            })
            .collect();

        let measures = builtin::MEASURE_NAMES
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let id = MeasureId::from_ordinal_unchecked(idx as u8 + 1);
                let category = categories
                    .iter()
                    .find(|c| c.contains(id))
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                MeasureDefinition {
                    id,
                    canonical_name: (*name).to_string(),
                    canonical_category: category,
                }
            })
            .collect();

        Self::assemble(builtin::LABEL.to_string(), categories, measures)
    }

    /// Parse and check a registry artifact in JSON form.
    pub fn from_json(source: &str) -> RubricResult<Self> {
        let definition: RegistryDefinition = serde_json::from_str(source)?;
        Ok(Self::from_definition(definition)?)
    }

    /// Check a registry definition and build the table.
    pub fn from_definition(definition: RegistryDefinition) -> Result<Self, RegistryError> {
        if definition.measures.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        let mut measures = Vec::with_capacity(definition.measures.len());
        for (position, entry) in definition.measures.iter().enumerate() {
            let id = MeasureId::parse(&entry.id)?;
            if !seen.insert(id) {
                return Err(RegistryError::DuplicateMeasure { id: entry.id.clone() });
            }
            if usize::from(id.ordinal()) != position + 1 {
                return Err(RegistryError::NonSequentialIds {
                    expected_last: definition.measures.len().min(99) as u8,
                    position,
                    found: entry.id.clone(),
                });
            }
            for (field, value) in [("name", &entry.name), ("category", &entry.category)] {
                if value.trim().is_empty() {
                    return Err(RegistryError::BlankField {
                        id: entry.id.clone(),
                        field: field.to_string(),
                    });
                }
            }
            measures.push(MeasureDefinition {
                id,
                canonical_name: entry.name.clone(),
                canonical_category: entry.category.clone(),
            });
        }

        let categories = check_categories(&definition.categories, measures.len())?;

        for measure in &measures {
            let owner = categories
                .iter()
                .find(|c| c.contains(measure.id))
                .map(|c| c.name.as_str())
                .unwrap_or_default();
            if owner != measure.canonical_category {
                return Err(RegistryError::CategoryAssignment {
                    id: measure.id.to_string(),
                    declared: measure.canonical_category.clone(),
                    owner: owner.to_string(),
                });
            }
        }

        Ok(Self::assemble(definition.label, categories, measures))
    }

    fn assemble(
        label: String,
        categories: Vec<CategoryDefinition>,
        measures: Vec<MeasureDefinition>,
    ) -> Self {
        let fingerprint = fingerprint(&categories, &measures);
        Self {
            version: SchemaVersion { label, fingerprint },
            categories,
            measures,
        }
    }

    /// Export back to the artifact form.
    pub fn to_definition(&self) -> RegistryDefinition {
        RegistryDefinition {
            label: self.version.label.clone(),
            categories: self
                .categories
                .iter()
                .map(|c| CategoryEntry {
                    name: c.name.clone(),
                    first: c.first.to_string(),
                    last: c.last.to_string(),
                })
                .collect(),
            measures: self
                .measures
                .iter()
                .map(|m| MeasureEntry {
                    id: m.id.to_string(),
                    name: m.canonical_name.clone(),
                    category: m.canonical_category.clone(),
                })
                .collect(),
        }
    }

    pub fn version(&self) -> &SchemaVersion {
        &self.version
    }

    pub fn lookup(&self, id: MeasureId) -> Result<&MeasureDefinition, RegistryError> {
        usize::from(id.ordinal())
            .checked_sub(1)
            .and_then(|idx| self.measures.get(idx))
            .ok_or_else(|| RegistryError::MeasureNotFound { id: id.to_string() })
    }

    /// Look up by the submitted text form. Malformed ids are simply not found.
    pub fn lookup_str(&self, raw: &str) -> Result<&MeasureDefinition, RegistryError> {
        MeasureId::parse(raw)
            .ok()
            .and_then(|id| self.lookup(id).ok())
            .ok_or_else(|| RegistryError::MeasureNotFound { id: raw.to_string() })
    }

    /// All definitions in id order.
    pub fn definitions(&self) -> &[MeasureDefinition] {
        &self.measures
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn category_of(&self, id: MeasureId) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.contains(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = MeasureId> + '_ {
        self.measures.iter().map(|m| m.id)
    }

    pub fn len(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    /// Highest attainable total score.
    pub fn max_total_score(&self) -> u32 {
        self.measures.len() as u32 * MAX_MEASURE_SCORE as u32
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::process_prompt_v2_2()
    }
}

fn check_categories(
    entries: &[CategoryEntry],
    measure_count: usize,
) -> Result<Vec<CategoryDefinition>, RegistryError> {
    let mut names = HashSet::new();
    let mut categories = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(RegistryError::BlankField {
                id: format!("{}..{}", entry.first, entry.last),
                field: "category name".to_string(),
            });
        }
        if !names.insert(entry.name.as_str()) {
            return Err(RegistryError::DuplicateCategory {
                name: entry.name.clone(),
            });
        }
        let first = MeasureId::parse(&entry.first)?;
        let last = MeasureId::parse(&entry.last)?;
        if first > last {
            return Err(RegistryError::InvertedRange {
                name: entry.name.clone(),
                first: entry.first.clone(),
                last: entry.last.clone(),
            });
        }
        categories.push(CategoryDefinition {
            name: entry.name.clone(),
            first,
            last,
        });
    }

    categories.sort_by_key(|c| c.first);

    let mut next = 1usize;
    for category in &categories {
        let first = usize::from(category.first.ordinal());
        if first != next {
            return Err(RegistryError::CategoryCoverage {
                details: format!(
                    "{} starts at {} but M{next:02} is the next unowned measure",
                    category.name, category.first
                ),
            });
        }
        next = usize::from(category.last.ordinal()) + 1;
    }
    if next != measure_count + 1 {
        return Err(RegistryError::CategoryCoverage {
            details: format!(
                "categories end at M{:02} but the registry has {measure_count} measures",
                next - 1
            ),
        });
    }

    Ok(categories)
}

fn fingerprint(categories: &[CategoryDefinition], measures: &[MeasureDefinition]) -> String {
    let mut hasher = blake3::Hasher::new();
    for category in categories {
        hasher.update(
            format!("C\t{}\t{}\t{}\n", category.name, category.first, category.last).as_bytes(),
        );
    }
    for measure in measures {
        hasher.update(
            format!(
                "M\t{}\t{}\t{}\n",
                measure.id, measure.canonical_name, measure.canonical_category
            )
            .as_bytes(),
        );
    }
    hasher.finalize().to_hex().to_string()
}
