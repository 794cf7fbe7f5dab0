use crate::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for report registration
///
/// A report groups the sector records submitted in one session. It is
/// created once and never updated.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Register a new report and return its generated UUID
    async fn create(&self) -> Result<Uuid, DomainError>;
}
