use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    BusinessTravel, DomainError, EnergyUsage, NewSectorRecord, SectorDetails, SectorKind,
    SectorRecord, SectorRepository, WasteCategory, WasteSector,
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

const UPSERT_ENERGY_USAGE: &str = r#"
    INSERT INTO energy_usage (
        report_uuid, city, company_name,
        average_monthly_bill, average_natural_gas_bill, monthly_fuel_bill
    ) VALUES ($1, $2, $3, $4, $5, $6)
    ON CONFLICT (report_uuid) DO UPDATE SET
        average_monthly_bill = EXCLUDED.average_monthly_bill,
        average_natural_gas_bill = EXCLUDED.average_natural_gas_bill,
        monthly_fuel_bill = EXCLUDED.monthly_fuel_bill
    RETURNING id
"#;

const UPSERT_WASTE_SECTOR: &str = r#"
    INSERT INTO waste_sector (
        report_uuid, city, company_name,
        waste_kg, recycled_or_composted_kg, waste_category
    ) VALUES ($1, $2, $3, $4, $5, $6)
    ON CONFLICT (report_uuid) DO UPDATE SET
        waste_kg = EXCLUDED.waste_kg,
        recycled_or_composted_kg = EXCLUDED.recycled_or_composted_kg,
        waste_category = EXCLUDED.waste_category
    RETURNING id
"#;

const UPSERT_BUSINESS_TRAVEL: &str = r#"
    INSERT INTO business_travel (
        report_uuid, city, company_name,
        kilometers_per_year, average_efficiency_per_100km
    ) VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (report_uuid) DO UPDATE SET
        kilometers_per_year = EXCLUDED.kilometers_per_year,
        average_efficiency_per_100km = EXCLUDED.average_efficiency_per_100km
    RETURNING id
"#;

// Newest first, so callers taking the first record get the latest submission.
const SELECT_ENERGY_USAGE: &str = r#"
    SELECT id, report_uuid, city, company_name, created_at,
           average_monthly_bill, average_natural_gas_bill, monthly_fuel_bill
    FROM energy_usage
    WHERE company_name = $1
    ORDER BY created_at DESC, id DESC
"#;

const SELECT_WASTE_SECTOR: &str = r#"
    SELECT id, report_uuid, city, company_name, created_at,
           waste_kg, recycled_or_composted_kg, waste_category
    FROM waste_sector
    WHERE company_name = $1
    ORDER BY created_at DESC, id DESC
"#;

const SELECT_BUSINESS_TRAVEL: &str = r#"
    SELECT id, report_uuid, city, company_name, created_at,
           kilometers_per_year, average_efficiency_per_100km
    FROM business_travel
    WHERE company_name = $1
    ORDER BY created_at DESC, id DESC
"#;

/// PostgreSQL implementation of SectorRepository
///
/// Only raw inputs are stored; `carbon_footprint` is computed on read by
/// the domain formulas.
#[derive(Clone)]
pub struct PostgresSectorRepository {
    pool: PgPool,
}

impl PostgresSectorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SectorRepository for PostgresSectorRepository {
    async fn upsert(&self, record: &NewSectorRecord) -> Result<i64, DomainError> {
        let query = match &record.details {
            SectorDetails::EnergyUsage(e) => sqlx::query_scalar::<_, i64>(UPSERT_ENERGY_USAGE)
                .bind(record.report_uuid)
                .bind(record.city.as_deref())
                .bind(&record.company_name)
                .bind(e.average_monthly_bill)
                .bind(e.average_natural_gas_bill)
                .bind(e.monthly_fuel_bill),
            SectorDetails::WasteSector(w) => sqlx::query_scalar::<_, i64>(UPSERT_WASTE_SECTOR)
                .bind(record.report_uuid)
                .bind(record.city.as_deref())
                .bind(&record.company_name)
                .bind(w.waste_kg)
                .bind(w.recycled_or_composted_kg)
                .bind(w.waste_category.as_str()),
            SectorDetails::BusinessTravel(b) => {
                sqlx::query_scalar::<_, i64>(UPSERT_BUSINESS_TRAVEL)
                    .bind(record.report_uuid)
                    .bind(record.city.as_deref())
                    .bind(&record.company_name)
                    .bind(b.kilometers_per_year)
                    .bind(b.average_efficiency_per_100km)
            }
        };

        query.fetch_one(&self.pool).await.map_err(|e| {
            DomainError::persistence(
                record.kind().as_str(),
                record.report_uuid.to_string(),
                e.to_string(),
            )
        })
    }

    async fn find_by_company(
        &self,
        kind: SectorKind,
        company_name: &str,
    ) -> Result<Vec<SectorRecord>, DomainError> {
        let sql = match kind {
            SectorKind::EnergyUsage => SELECT_ENERGY_USAGE,
            SectorKind::WasteSector => SELECT_WASTE_SECTOR,
            SectorKind::BusinessTravel => SELECT_BUSINESS_TRAVEL,
        };

        let rows = sqlx::query(sql)
            .bind(company_name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::persistence(kind.as_str(), company_name, e.to_string()))?;

        rows.iter()
            .map(|row| {
                let stored = decode_row(kind, row).map_err(|e| {
                    DomainError::persistence(kind.as_str(), company_name, e.to_string())
                })?;
                SectorRecord::from_stored(
                    stored.id,
                    stored.report_uuid,
                    stored.city,
                    stored.company_name,
                    stored.created_at,
                    stored.details,
                )
            })
            .collect()
    }
}

/// Decoded columns, before the footprint is attached.
struct StoredRow {
    id: i64,
    report_uuid: Uuid,
    city: Option<String>,
    company_name: String,
    created_at: DateTime<Utc>,
    details: SectorDetails,
}

fn decode_row(kind: SectorKind, row: &PgRow) -> Result<StoredRow, sqlx::Error> {
    let details = match kind {
        SectorKind::EnergyUsage => SectorDetails::EnergyUsage(EnergyUsage {
            average_monthly_bill: row.try_get("average_monthly_bill")?,
            average_natural_gas_bill: row.try_get("average_natural_gas_bill")?,
            monthly_fuel_bill: row.try_get("monthly_fuel_bill")?,
        }),
        SectorKind::WasteSector => {
            let category: String = row.try_get("waste_category")?;
            let waste_category = category.parse::<WasteCategory>().map_err(|e| {
                sqlx::Error::ColumnDecode {
                    index: "waste_category".to_string(),
                    source: Box::new(e),
                }
            })?;
            SectorDetails::WasteSector(WasteSector {
                waste_kg: row.try_get("waste_kg")?,
                recycled_or_composted_kg: row.try_get("recycled_or_composted_kg")?,
                waste_category,
            })
        }
        SectorKind::BusinessTravel => SectorDetails::BusinessTravel(BusinessTravel {
            kilometers_per_year: row.try_get("kilometers_per_year")?,
            average_efficiency_per_100km: row.try_get("average_efficiency_per_100km")?,
        }),
    };

    Ok(StoredRow {
        id: row.try_get("id")?,
        report_uuid: row.try_get("report_uuid")?,
        city: row.try_get("city")?,
        company_name: row.try_get("company_name")?,
        created_at: row.try_get("created_at")?,
        details,
    })
}
