use crate::backend::{AttendanceSource, Session};
use crate::errors::AppError;
use crate::leave::LeaveForm;
use crate::models::{LeaveResponse, MonthGrid, NavigateRequest, ToggleRequest, ToggleResponse};
use crate::period::Direction;
use crate::state::AppState;
use crate::ui::render_dashboard;
use crate::view::RenderOutcome;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

/// Extra renders attempted when a concurrent navigation supersedes ours.
const RENDER_RETRIES: usize = 2;

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let session = Session::from_headers(&headers);
    let source = state.backend.for_session(&session);
    let today = today();

    let mut grids = Vec::with_capacity(state.calendars.ids().len());
    for id in state.calendars.ids() {
        let outcome = state.calendars.render(id, &source, today).await;
        match settle(&state, id, &source, today, outcome).await {
            Ok(grid) => grids.push(grid),
            Err(err) => warn!(calendar = %id, "left off the dashboard: {}", err.message),
        }
    }
    Html(render_dashboard(&grids))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<MonthGrid>, AppError> {
    let session = Session::from_headers(&headers);
    let source = state.backend.for_session(&session);
    let today = today();

    let outcome = state.calendars.render(&id, &source, today).await;
    settle(&state, &id, &source, today, outcome).await.map(Json)
}

pub async fn navigate_calendar(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<MonthGrid>, AppError> {
    let direction = Direction::try_from(payload.direction)?;
    let session = Session::from_headers(&headers);
    let source = state.backend.for_session(&session);
    let today = today();

    let outcome = state.calendars.navigate(&id, direction, &source, today).await;
    settle(&state, &id, &source, today, outcome).await.map(Json)
}

pub async fn calendar_prev(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Redirect {
    let session = Session::from_headers(&headers);
    state
        .calendars
        .navigate(&id, Direction::Back, &state.backend.for_session(&session), today())
        .await;
    Redirect::to("/")
}

pub async fn calendar_next(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Redirect {
    let session = Session::from_headers(&headers);
    state
        .calendars
        .navigate(&id, Direction::Forward, &state.backend.for_session(&session), today())
        .await;
    Redirect::to("/")
}

pub async fn toggle_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<ToggleRequest>,
) -> (StatusCode, Json<ToggleResponse>) {
    let action = payload.action.trim();
    if action != "login" && action != "logout" {
        return (
            StatusCode::BAD_REQUEST,
            Json(ToggleResponse {
                success: false,
                error: Some("action must be 'login' or 'logout'".to_string()),
                ..Default::default()
            }),
        );
    }

    let session = Session::from_headers(&headers);
    match state.backend.toggle_attendance(action, &session).await {
        Ok((status, mut response)) => {
            if !status.is_success() && response.error.is_none() {
                response.error = Some("Failed to mark attendance".to_string());
            }
            (status, Json(response))
        }
        Err(err) => {
            error!("attendance toggle failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                Json(ToggleResponse {
                    success: false,
                    error: Some("Failed to mark attendance".to_string()),
                    ..Default::default()
                }),
            )
        }
    }
}

pub async fn apply_leave(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LeaveForm>,
) -> (StatusCode, Json<LeaveResponse>) {
    if let Err(err) = form.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(LeaveResponse {
                success: false,
                error: Some(err.to_string()),
            }),
        );
    }

    let session = Session::from_headers(&headers);
    match state.backend.apply_leave(&form, &session).await {
        Ok((status, mut response)) => {
            if !status.is_success() && response.error.is_none() {
                response.error = Some("Failed to apply leave".to_string());
            }
            (status, Json(response))
        }
        Err(err) => {
            error!("leave application failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                Json(LeaveResponse {
                    success: false,
                    error: Some("Failed to apply leave".to_string()),
                }),
            )
        }
    }
}

/// Resolves a render for this caller. A superseded render is redone with the
/// caller's own session; the grid committed for someone else is never served.
async fn settle<S: AttendanceSource>(
    state: &AppState,
    id: &str,
    source: &S,
    today: NaiveDate,
    mut outcome: Option<RenderOutcome>,
) -> Result<MonthGrid, AppError> {
    let mut retries = 0;
    loop {
        match outcome {
            None => return Err(AppError::not_found(format!("no calendar named '{id}'"))),
            Some(RenderOutcome::Rendered(grid)) => return Ok(grid),
            Some(RenderOutcome::Superseded) if retries < RENDER_RETRIES => {
                retries += 1;
                debug!(calendar = id, retries, "render superseded, rendering again");
                outcome = state.calendars.render(id, source, today).await;
            }
            Some(RenderOutcome::Superseded) => {
                return Err(AppError::conflict("calendar is being re-rendered"));
            }
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
