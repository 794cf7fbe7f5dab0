use super::{NewSectorRecord, SectorKind, SectorRecord};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for sector record persistence
///
/// One implementation serves all three sector tables; the kind is carried
/// by the record (on write) or passed explicitly (on read).
#[async_trait]
pub trait SectorRepository: Send + Sync {
    /// Insert a record, or overwrite the sector fields of the record already
    /// stored under the same `report_uuid`. Returns the row id.
    async fn upsert(&self, record: &NewSectorRecord) -> Result<i64, DomainError>;

    /// All records of `kind` for a company, in no particular order.
    /// An empty vector means no data, not an error.
    async fn find_by_company(
        &self,
        kind: SectorKind,
        company_name: &str,
    ) -> Result<Vec<SectorRecord>, DomainError>;
}
