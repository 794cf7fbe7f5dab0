//! Infrastructure layer - External integrations

pub mod advisory;
pub mod config;
pub mod database;

pub use advisory::FileAdvisorySource;
pub use config::AppConfig;
pub use database::{PostgresReportRepository, PostgresSectorRepository};
