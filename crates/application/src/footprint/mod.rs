mod service;

pub use service::FootprintService;
