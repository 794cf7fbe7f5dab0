use application::FootprintService;

/// Shared handler state.
pub struct AppState {
    pub service: FootprintService,
}

impl AppState {
    pub fn new(service: FootprintService) -> Self {
        Self { service }
    }
}
