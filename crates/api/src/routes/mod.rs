pub mod health;
pub mod logs;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 service + storage health
///
/// /users                  list, create
/// /users/{id}             get, update, delete
///
/// /logs                   list recent, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/users", users::router())
        .nest("/logs", logs::router())
}
