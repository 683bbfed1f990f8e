//! Handlers for the append-only check-in log.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use facegate_db::models::check_in_log::{CreateCheckInLog, NewCheckInLog};
use facegate_db::repositories::check_in_log_repo::clamp_limit;

use super::require_fields;
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::LogListParams;
use crate::state::AppState;

/// `userId`, `userName` and `status` must all be present and non-empty.
/// `status` is free text; no vocabulary is enforced.
fn validate_create_input(input: CreateCheckInLog) -> AppResult<NewCheckInLog> {
    require_fields(&[
        ("userId", &input.user_id),
        ("userName", &input.user_name),
        ("status", &input.status),
    ])?;

    Ok(NewCheckInLog {
        user_id: input.user_id.unwrap_or_default(),
        user_name: input.user_name.unwrap_or_default(),
        status: input.status.unwrap_or_default(),
    })
}

/// GET /api/logs
///
/// Most recent check-ins, newest first, at most 100 (`?limit=` lowers it).
pub async fn list_logs(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LogListParams>,
) -> AppResult<impl IntoResponse> {
    let logs = state.store.recent_logs(clamp_limit(params.limit)).await?;

    Ok(Json(logs))
}

/// POST /api/logs
///
/// Record a check-in event. The timestamp is assigned by storage.
pub async fn create_log(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCheckInLog>,
) -> AppResult<impl IntoResponse> {
    let entry = validate_create_input(input)?;

    let log = state.store.append_log(&entry).await?;

    tracing::info!(
        log_id = log.log_id,
        user_id = %log.user_id,
        status = %log.status,
        "Check-in recorded",
    );

    Ok((StatusCode::CREATED, Json(log)))
}
