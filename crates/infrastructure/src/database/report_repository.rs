use async_trait::async_trait;
use domain::{DomainError, ReportRepository};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PostgresReportRepository {
    pool: PgPool,
}

impl PostgresReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn create(&self) -> Result<Uuid, DomainError> {
        sqlx::query_scalar::<_, Uuid>("INSERT INTO reports DEFAULT VALUES RETURNING report_uuid")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::persistence("report", "new report", e.to_string()))
    }
}
