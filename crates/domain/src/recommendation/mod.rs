//! Recommendation assembly: picks the dominant sector(s) from a set of
//! footprints and stitches the advisory text together.

mod advisory;
mod footprints;

pub use advisory::{AdvisorySource, missing_advisory_text};
#[cfg(test)]
pub use advisory::MockAdvisorySource;
pub use footprints::SectorFootprints;

use serde::Serialize;

use crate::sector::SectorKind;

/// EU emissions monitoring and reporting guidance.
pub const DEFAULT_REFERENCE_URL: &str = "https://climate.ec.europa.eu/eu-action/international-action-climate-change/emissions-monitoring-reporting_en";

pub const NO_DATA_MESSAGE: &str = "No carbon footprint data available for the given company_name";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// First of the tied winners in display order.
    pub highest_carbon_footprint_sector: SectorKind,
    /// Comma-joined names of all tied winners. Holds names, not a number;
    /// the field name is kept for client compatibility.
    pub carbon_footprint: String,
    #[serde(rename = "EU_law")]
    pub eu_law: String,
    pub recommendation: String,
    pub total_carbon_footprint: f64,
    pub business_travel: Option<f64>,
    pub energy_usage: Option<f64>,
    pub waste_sector: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecommendationResult {
    NoData { message: String },
    Found(Recommendation),
}

impl RecommendationResult {
    pub fn no_data() -> Self {
        Self::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Found(r) => Some(r),
            Self::NoData { .. } => None,
        }
    }
}

/// Formats kilograms keeping at least one decimal (`500.0`, `120.75`).
fn format_kg(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

pub async fn build_recommendation(
    footprints: &SectorFootprints,
    advisory: &dyn AdvisorySource,
    reference_url: &str,
) -> RecommendationResult {
    let highest = footprints.highest_sectors();
    let Some(first) = highest.first().copied() else {
        return RecommendationResult::no_data();
    };

    let total = footprints.total();
    let mut text = format!("Total carbon footprint: {} kg \n", format_kg(total));
    for kind in &highest {
        let advice = advisory.load(*kind).await;
        text.push_str(&format!(
            "Recommendations for the max footprint sector - {}:\n{}\n\n",
            kind.heading(),
            advice
        ));
    }

    let winners = highest
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    RecommendationResult::Found(Recommendation {
        highest_carbon_footprint_sector: first,
        carbon_footprint: winners,
        eu_law: reference_url.to_string(),
        recommendation: text,
        total_carbon_footprint: total,
        business_travel: footprints.get(SectorKind::BusinessTravel),
        energy_usage: footprints.get(SectorKind::EnergyUsage),
        waste_sector: footprints.get(SectorKind::WasteSector),
    })
}
