use crate::backend::BackendClient;
use crate::view::CalendarBoard;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub calendars: Arc<CalendarBoard>,
}

impl AppState {
    pub fn new(backend: BackendClient, calendars: CalendarBoard) -> Self {
        Self {
            backend,
            calendars: Arc::new(calendars),
        }
    }
}
