use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use domain::recommendation::{DEFAULT_REFERENCE_URL, build_recommendation};
use domain::{
    AdvisorySource, DomainError, NewSectorRecord, RecommendationResult, ReportRepository,
    SectorFootprints, SectorKind, SectorRecord, SectorRepository,
};

/// Use cases behind the HTTP surface: report registration, sector record
/// submission and lookup, and the per-company recommendation.
///
/// Holds no per-request state; one instance is shared by all handlers.
pub struct FootprintService {
    reports: Arc<dyn ReportRepository>,
    sectors: Arc<dyn SectorRepository>,
    advisory: Arc<dyn AdvisorySource>,
    reference_url: String,
}

impl FootprintService {
    pub fn new(
        reports: Arc<dyn ReportRepository>,
        sectors: Arc<dyn SectorRepository>,
        advisory: Arc<dyn AdvisorySource>,
    ) -> Self {
        Self {
            reports,
            sectors,
            advisory,
            reference_url: DEFAULT_REFERENCE_URL.to_string(),
        }
    }

    pub fn with_reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = url.into();
        self
    }

    pub async fn create_report(&self) -> Result<Uuid, DomainError> {
        let report_uuid = self.reports.create().await.inspect_err(|e| {
            error!("Failed to register report: {}", e);
        })?;
        info!(report_uuid = %report_uuid, "Report registered");
        Ok(report_uuid)
    }

    pub async fn create_sector_record(&self, record: NewSectorRecord) -> Result<i64, DomainError> {
        let kind = record.kind();
        if let Err(e) = record.validate() {
            warn!(sector = %kind, report_uuid = %record.report_uuid, "Rejected sector record: {}", e);
            return Err(e);
        }

        let record_id = self.sectors.upsert(&record).await.inspect_err(|e| {
            error!(sector = %kind, report_uuid = %record.report_uuid, "Failed to store sector record: {}", e);
        })?;

        info!(
            sector = %kind,
            report_uuid = %record.report_uuid,
            record_id,
            "Sector record stored"
        );
        Ok(record_id)
    }

    pub async fn get_sector_records(
        &self,
        kind: SectorKind,
        company_name: &str,
    ) -> Result<Vec<SectorRecord>, DomainError> {
        let records = self.sectors.find_by_company(kind, company_name).await?;
        debug!(sector = %kind, company_name, count = records.len(), "Sector records loaded");
        Ok(records)
    }

    /// Fetches all three sectors concurrently and builds the recommendation.
    /// Store failures propagate; a company with no data yields `NoData`.
    pub async fn get_recommendation(
        &self,
        company_name: &str,
    ) -> Result<RecommendationResult, DomainError> {
        let (business_travel, energy_usage, waste_sector) = tokio::try_join!(
            self.get_sector_records(SectorKind::BusinessTravel, company_name),
            self.get_sector_records(SectorKind::EnergyUsage, company_name),
            self.get_sector_records(SectorKind::WasteSector, company_name),
        )
        .inspect_err(|e| {
            error!(company_name, "Failed to fetch sector records: {}", e);
        })?;

        let footprints = SectorFootprints::from_records([
            (SectorKind::BusinessTravel, business_travel.as_slice()),
            (SectorKind::EnergyUsage, energy_usage.as_slice()),
            (SectorKind::WasteSector, waste_sector.as_slice()),
        ]);

        if footprints.is_empty() {
            info!(company_name, "No carbon footprint data found");
        }

        let result =
            build_recommendation(&footprints, self.advisory.as_ref(), &self.reference_url).await;

        if let Some(rec) = result.recommendation() {
            info!(
                company_name,
                highest = %rec.highest_carbon_footprint_sector,
                total = rec.total_carbon_footprint,
                "Recommendation generated"
            );
        }

        Ok(result)
    }
}
