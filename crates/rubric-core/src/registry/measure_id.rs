use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::RegistryError;

static MEASURE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M([0-9]{2})$").unwrap_or_else(|e| panic!("measure id pattern: {e}"))
});

/// Identifier of a rubric measure, written `M` followed by two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "String", into = "String")]
#[ts(export, type = "string")]
pub struct MeasureId(u8);

impl MeasureId {
    /// Parse the canonical text form. No trimming or case folding.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        let ordinal = MEASURE_ID_RE
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<u8>().ok())
            .ok_or_else(|| RegistryError::InvalidMeasureId { id: raw.to_string() })?;
        Ok(Self(ordinal))
    }

    /// Build from the numeric part. `from_ordinal(17)` is `M17`.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, RegistryError> {
        if ordinal > 99 {
            return Err(RegistryError::InvalidMeasureId {
                id: format!("M{ordinal}"),
            });
        }
        Ok(Self(ordinal))
    }

    /// Caller guarantees `ordinal <= 99`.
    pub(crate) const fn from_ordinal_unchecked(ordinal: u8) -> Self {
        Self(ordinal)
    }

    pub fn ordinal(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MeasureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{:02}", self.0)
    }
}

impl FromStr for MeasureId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MeasureId {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MeasureId> for String {
    fn from(id: MeasureId) -> Self {
        id.to_string()
    }
}
