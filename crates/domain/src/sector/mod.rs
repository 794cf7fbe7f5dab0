mod kind;
mod record;
mod repository;
mod waste_category;

pub use kind::SectorKind;
pub use record::{
    BusinessTravel, EnergyUsage, NewSectorRecord, SectorDetails, SectorRecord, WasteSector,
};
pub use repository::SectorRepository;
pub use waste_category::WasteCategory;
