use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Waste stream classification.
///
/// Only `Recyclable` has an emission formula; the others are accepted and
/// stored but contribute a zero footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WasteCategory {
    Recyclable,
    Compostable,
    NonRecyclable,
}

impl WasteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recyclable => "RECYCLABLE",
            Self::Compostable => "COMPOSTABLE",
            Self::NonRecyclable => "NON_RECYCLABLE",
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WasteCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECYCLABLE" => Ok(Self::Recyclable),
            "COMPOSTABLE" => Ok(Self::Compostable),
            "NON_RECYCLABLE" => Ok(Self::NonRecyclable),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown waste category: {} (expected RECYCLABLE, COMPOSTABLE or NON_RECYCLABLE)",
                other
            ))),
        }
    }
}
