//! Carbon footprint formulas.
//!
//! Every function returns kilograms of CO2-equivalent per year. Rounding is
//! round-half-away-from-zero (`f64::round`) on the scaled value: per-sector
//! figures are rounded to 1 decimal place, totals to 2.

use crate::error::{DomainError, Result};
use crate::sector::{BusinessTravel, EnergyUsage, WasteCategory, WasteSector};

/// kg CO2e per currency unit of electricity bill
pub const ELECTRICITY_FACTOR: f64 = 0.0005;
/// kg CO2e per unit of natural gas bill
pub const NATURAL_GAS_FACTOR: f64 = 0.053;
/// kg CO2e per liter of fuel
pub const FUEL_FACTOR: f64 = 2.32;
/// kg CO2e per kg of recyclable waste
pub const RECYCLABLE_WASTE_FACTOR: f64 = 0.57;
/// kg CO2e per liter burned while travelling
pub const TRAVEL_FUEL_FACTOR: f64 = 2.31;

const MONTHS_PER_YEAR: f64 = 12.0;

pub const SECTOR_PRECISION: i32 = 1;
pub const TOTAL_PRECISION: i32 = 2;

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn energy_usage_footprint(input: &EnergyUsage) -> f64 {
    let raw = (input.average_monthly_bill * MONTHS_PER_YEAR * ELECTRICITY_FACTOR)
        + (input.average_natural_gas_bill * MONTHS_PER_YEAR * NATURAL_GAS_FACTOR)
        + (input.monthly_fuel_bill * MONTHS_PER_YEAR * FUEL_FACTOR);
    round_to(raw, SECTOR_PRECISION)
}

/// Only `RECYCLABLE` waste has a formula; other categories yield `0.0`.
pub fn waste_sector_footprint(input: &WasteSector) -> f64 {
    match input.waste_category {
        WasteCategory::Recyclable => {
            let raw = (input.waste_kg * MONTHS_PER_YEAR * RECYCLABLE_WASTE_FACTOR)
                * ((100.0 - input.recycled_or_composted_kg) / 100.0);
            round_to(raw, SECTOR_PRECISION)
        }
        WasteCategory::Compostable | WasteCategory::NonRecyclable => 0.0,
    }
}

pub fn business_travel_footprint(input: &BusinessTravel) -> Result<f64> {
    if input.average_efficiency_per_100km == 0.0 {
        return Err(DomainError::DivisionByZero(format!(
            "average_efficiency_per_100km is zero ({} km/year)",
            input.kilometers_per_year
        )));
    }
    let raw =
        (input.kilometers_per_year / input.average_efficiency_per_100km) * TRAVEL_FUEL_FACTOR;
    Ok(round_to(raw, SECTOR_PRECISION))
}
