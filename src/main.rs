use attendance_web::{router, AppState, BackendClient, CalendarBoard, Config};
use attendance_web::period::DisplayPeriod;
use chrono::Local;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let backend = BackendClient::new(&config.backend_url, config.backend_timeout)?;

    let period = DisplayPeriod::containing(Local::now().date_naive());
    let calendars = CalendarBoard::new(config.calendar_ids.iter().cloned(), period);
    info!(
        calendars = ?calendars.ids(),
        backend = backend.base_url(),
        period = %period.title(),
        "calendars ready"
    );

    let app = router(AppState::new(backend, calendars));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
