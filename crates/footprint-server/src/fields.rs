//! Request body field tables.
//!
//! Each POST endpoint declares the fields it accepts in a static table. The
//! body is checked against the table first, so a bad request names the
//! offending field, then deserialized into the typed domain input.

use domain::{
    BusinessTravel, DomainError, EnergyUsage, NewSectorRecord, SectorDetails, SectorKind,
    WasteCategory, WasteSector,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    Text,
    Uuid,
    WasteCategory,
}

impl FieldType {
    fn describe(&self) -> &'static str {
        match self {
            Self::Number => "a number",
            Self::Text => "a string",
            Self::Uuid => "a UUID string",
            Self::WasteCategory => "one of RECYCLABLE, COMPOSTABLE, NON_RECYCLABLE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub field_type: FieldType,
}

const fn required(name: &'static str, field_type: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        required: true,
        field_type,
    }
}

const fn optional(name: &'static str, field_type: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        required: false,
        field_type,
    }
}

pub const ENERGY_USAGE_FIELDS: &[FieldSpec] = &[
    required("report_uuid", FieldType::Uuid),
    required("average_monthly_bill", FieldType::Number),
    required("average_natural_gas_bill", FieldType::Number),
    required("monthly_fuel_bill", FieldType::Number),
    optional("city", FieldType::Text),
    required("company_name", FieldType::Text),
];

pub const WASTE_SECTOR_FIELDS: &[FieldSpec] = &[
    required("report_uuid", FieldType::Uuid),
    required("waste_kg", FieldType::Number),
    required("recycled_or_composted_kg", FieldType::Number),
    required("waste_category", FieldType::WasteCategory),
    optional("city", FieldType::Text),
    required("company_name", FieldType::Text),
];

pub const BUSINESS_TRAVEL_FIELDS: &[FieldSpec] = &[
    required("report_uuid", FieldType::Uuid),
    required("kilometers_per_year", FieldType::Number),
    required("average_efficiency_per_100km", FieldType::Number),
    optional("city", FieldType::Text),
    required("company_name", FieldType::Text),
];

pub fn fields_for(kind: SectorKind) -> &'static [FieldSpec] {
    match kind {
        SectorKind::EnergyUsage => ENERGY_USAGE_FIELDS,
        SectorKind::WasteSector => WASTE_SECTOR_FIELDS,
        SectorKind::BusinessTravel => BUSINESS_TRAVEL_FIELDS,
    }
}

/// Checks presence and JSON type of every declared field. Undeclared keys
/// are ignored.
pub fn validate_body(body: &Value, fields: &[FieldSpec]) -> Result<(), DomainError> {
    let object = body
        .as_object()
        .ok_or_else(|| DomainError::InvalidInput("Request body must be a JSON object".into()))?;

    for spec in fields {
        let value = match object.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    return Err(DomainError::InvalidInput(format!(
                        "Missing required field: {}",
                        spec.name
                    )));
                }
                continue;
            }
            Some(v) => v,
        };

        let valid = match spec.field_type {
            FieldType::Number => value.is_number(),
            FieldType::Text => value.is_string(),
            FieldType::Uuid => value.as_str().is_some_and(|s| Uuid::parse_str(s).is_ok()),
            FieldType::WasteCategory => match value.as_str() {
                Some(s) => {
                    s.parse::<WasteCategory>()?;
                    true
                }
                None => false,
            },
        };

        if !valid {
            return Err(DomainError::InvalidInput(format!(
                "Field {} must be {}",
                spec.name,
                spec.field_type.describe()
            )));
        }
    }

    Ok(())
}

fn typed<T: DeserializeOwned>(body: &Value) -> Result<T, DomainError> {
    serde_json::from_value(body.clone()).map_err(|e| DomainError::InvalidInput(e.to_string()))
}

/// Builds the write model for `kind` from a request body.
pub fn parse_sector_record(kind: SectorKind, body: &Value) -> Result<NewSectorRecord, DomainError> {
    validate_body(body, fields_for(kind))?;

    let report_uuid = body
        .get("report_uuid")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| DomainError::InvalidInput("Field report_uuid must be a UUID string".into()))?;
    let company_name = body
        .get("company_name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let city = body
        .get("city")
        .and_then(Value::as_str)
        .map(str::to_string);

    let details = match kind {
        SectorKind::EnergyUsage => SectorDetails::EnergyUsage(typed::<EnergyUsage>(body)?),
        SectorKind::WasteSector => SectorDetails::WasteSector(typed::<WasteSector>(body)?),
        SectorKind::BusinessTravel => {
            SectorDetails::BusinessTravel(typed::<BusinessTravel>(body)?)
        }
    };

    Ok(NewSectorRecord::new(report_uuid, city, company_name, details))
}
