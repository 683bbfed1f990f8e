use axum::routing::get;
use axum::Router;

use crate::handlers::logs;
use crate::state::AppState;

/// Check-in log routes mounted at `/logs`. There is no update or delete.
///
/// ```text
/// GET    /          -> list_logs
/// POST   /          -> create_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(logs::list_logs).post(logs::create_log))
}
