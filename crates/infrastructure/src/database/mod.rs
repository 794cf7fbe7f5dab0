mod pool;
mod report_repository;
mod sector_repository;

pub use pool::{connect, run_migrations};
pub use report_repository::PostgresReportRepository;
pub use sector_repository::PostgresSectorRepository;
