use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The three activity sectors a report is broken down into.
///
/// Variant order is the display order used by the recommendation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorKind {
    BusinessTravel,
    EnergyUsage,
    WasteSector,
}

impl SectorKind {
    pub const ALL: [SectorKind; 3] = [
        SectorKind::BusinessTravel,
        SectorKind::EnergyUsage,
        SectorKind::WasteSector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessTravel => "business_travel",
            Self::EnergyUsage => "energy_usage",
            Self::WasteSector => "waste_sector",
        }
    }

    /// Human-readable heading, e.g. "Business Travel".
    pub fn heading(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business_travel" => Ok(Self::BusinessTravel),
            "energy_usage" => Ok(Self::EnergyUsage),
            "waste_sector" => Ok(Self::WasteSector),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown sector: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        assert_eq!(SectorKind::BusinessTravel.heading(), "Business Travel");
        assert_eq!(SectorKind::EnergyUsage.heading(), "Energy Usage");
        assert_eq!(SectorKind::WasteSector.heading(), "Waste Sector");
    }

    #[test]
    fn test_round_trip_str() {
        for kind in SectorKind::ALL {
            assert_eq!(kind.as_str().parse::<SectorKind>().unwrap(), kind);
        }
        assert!("transport".parse::<SectorKind>().is_err());
    }

    #[test]
    fn test_display_order() {
        let mut kinds = vec![
            SectorKind::WasteSector,
            SectorKind::BusinessTravel,
            SectorKind::EnergyUsage,
        ];
        kinds.sort();
        assert_eq!(kinds, SectorKind::ALL.to_vec());
    }
}
