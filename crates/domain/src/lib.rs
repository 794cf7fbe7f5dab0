//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Sector records and their inputs (EnergyUsage, WasteSector, BusinessTravel)
//! - The carbon footprint formulas
//! - Recommendation assembly
//! - Repository and advisory interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Formulas live here only; stores annotate records through them
//! - Testable in isolation

pub mod error;
pub mod footprint;
pub mod recommendation;
pub mod report;
pub mod sector;

// Re-export commonly used types
pub use error::DomainError;
pub use recommendation::{
    AdvisorySource, Recommendation, RecommendationResult, SectorFootprints,
};
pub use report::ReportRepository;
pub use sector::{
    BusinessTravel, EnergyUsage, NewSectorRecord, SectorDetails, SectorKind, SectorRecord,
    SectorRepository, WasteCategory, WasteSector,
};
