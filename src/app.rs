use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calendar/:id/prev", post(handlers::calendar_prev))
        .route("/calendar/:id/next", post(handlers::calendar_next))
        .route("/api/calendar/:id", get(handlers::get_calendar))
        .route("/api/calendar/:id/navigate", post(handlers::navigate_calendar))
        .route("/attendance", post(handlers::toggle_attendance))
        .route("/apply_leave", post(handlers::apply_leave))
        .with_state(state)
}
