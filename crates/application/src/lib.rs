//! Application layer - Use cases and business workflows

pub mod footprint;

pub use footprint::FootprintService;
