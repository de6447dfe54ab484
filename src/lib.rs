pub mod app;
pub mod backend;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod leave;
pub mod models;
pub mod period;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use backend::{AttendanceSource, BackendClient, Session};
pub use config::Config;
pub use state::AppState;
pub use view::{CalendarBoard, RenderOutcome};
