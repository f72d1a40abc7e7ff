/// Errors raised while building or querying a measure registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("measure not found: {id}")]
    MeasureNotFound { id: String },

    #[error("invalid measure id {id:?}: expected 'M' followed by two digits")]
    InvalidMeasureId { id: String },

    #[error("duplicate measure id in registry: {id}")]
    DuplicateMeasure { id: String },

    #[error("registry ids are not a dense M01..M{expected_last:02} sequence: found {found} at position {position}")]
    NonSequentialIds {
        expected_last: u8,
        position: usize,
        found: String,
    },

    #[error("duplicate category in registry: {name}")]
    DuplicateCategory { name: String },

    #[error("category {name} has an inverted range {first}..{last}")]
    InvertedRange {
        name: String,
        first: String,
        last: String,
    },

    #[error("categories do not tile the measure range: {details}")]
    CategoryCoverage { details: String },

    #[error("measure {id} declares category {declared:?} but falls in {owner:?}")]
    CategoryAssignment {
        id: String,
        declared: String,
        owner: String,
    },

    #[error("blank {field} for {id}")]
    BlankField { id: String, field: String },

    #[error("registry has no measures")]
    Empty,
}
