pub mod api;
pub mod error;
pub mod fields;
pub mod state;

use application::FootprintService;
use state::AppState;
use std::sync::Arc;

pub fn setup_app_state(service: FootprintService) -> Arc<AppState> {
    Arc::new(AppState::new(service))
}
