use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SectorKind, WasteCategory};
use crate::error::{DomainError, Result};
use crate::footprint;

/// Energy bills, all monthly figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyUsage {
    pub average_monthly_bill: f64,
    pub average_natural_gas_bill: f64,
    pub monthly_fuel_bill: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteSector {
    pub waste_kg: f64,
    /// Used as a percentage (0-100) by the footprint formula despite the name.
    pub recycled_or_composted_kg: f64,
    pub waste_category: WasteCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessTravel {
    pub kilometers_per_year: f64,
    /// Liters per 100km. Must be non-zero.
    pub average_efficiency_per_100km: f64,
}

/// Sector-specific inputs of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectorDetails {
    EnergyUsage(EnergyUsage),
    WasteSector(WasteSector),
    BusinessTravel(BusinessTravel),
}

impl SectorDetails {
    pub fn kind(&self) -> SectorKind {
        match self {
            Self::EnergyUsage(_) => SectorKind::EnergyUsage,
            Self::WasteSector(_) => SectorKind::WasteSector,
            Self::BusinessTravel(_) => SectorKind::BusinessTravel,
        }
    }

    /// Estimated annual kg CO2e, rounded to one decimal place.
    pub fn carbon_footprint(&self) -> Result<f64> {
        match self {
            Self::EnergyUsage(e) => Ok(footprint::energy_usage_footprint(e)),
            Self::WasteSector(w) => Ok(footprint::waste_sector_footprint(w)),
            Self::BusinessTravel(b) => footprint::business_travel_footprint(b),
        }
    }

    /// Named numeric inputs, in column order.
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::EnergyUsage(e) => vec![
                ("average_monthly_bill", e.average_monthly_bill),
                ("average_natural_gas_bill", e.average_natural_gas_bill),
                ("monthly_fuel_bill", e.monthly_fuel_bill),
            ],
            Self::WasteSector(w) => vec![
                ("waste_kg", w.waste_kg),
                ("recycled_or_composted_kg", w.recycled_or_composted_kg),
            ],
            Self::BusinessTravel(b) => vec![
                ("kilometers_per_year", b.kilometers_per_year),
                (
                    "average_efficiency_per_100km",
                    b.average_efficiency_per_100km,
                ),
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "{} must be a finite number",
                    name
                )));
            }
            if value < 0.0 {
                return Err(DomainError::InvalidInput(format!(
                    "{} must not be negative (got {})",
                    name, value
                )));
            }
        }

        if let Self::BusinessTravel(b) = self {
            if b.average_efficiency_per_100km == 0.0 {
                return Err(DomainError::InvalidInput(
                    "average_efficiency_per_100km must be greater than zero".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Write model for `SectorRepository::upsert`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSectorRecord {
    pub report_uuid: Uuid,
    pub city: Option<String>,
    pub company_name: String,
    pub details: SectorDetails,
}

impl NewSectorRecord {
    pub fn new(
        report_uuid: Uuid,
        city: Option<String>,
        company_name: impl Into<String>,
        details: SectorDetails,
    ) -> Self {
        Self {
            report_uuid,
            city,
            company_name: company_name.into(),
            details,
        }
    }

    pub fn kind(&self) -> SectorKind {
        self.details.kind()
    }

    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "company_name cannot be empty".to_string(),
            ));
        }
        self.details.validate()
    }
}

/// A stored record annotated with its computed footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorRecord {
    pub id: i64,
    pub report_uuid: Uuid,
    pub city: Option<String>,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: SectorDetails,
    pub carbon_footprint: f64,
}

impl SectorRecord {
    /// Builds a record from stored columns, computing `carbon_footprint`.
    pub fn from_stored(
        id: i64,
        report_uuid: Uuid,
        city: Option<String>,
        company_name: String,
        created_at: DateTime<Utc>,
        details: SectorDetails,
    ) -> Result<Self> {
        let carbon_footprint = details.carbon_footprint()?;
        Ok(Self {
            id,
            report_uuid,
            city,
            company_name,
            created_at,
            details,
            carbon_footprint,
        })
    }

    pub fn kind(&self) -> SectorKind {
        self.details.kind()
    }
}
