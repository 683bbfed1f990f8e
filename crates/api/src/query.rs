//! Query parameter types for API handlers.

use serde::Deserialize;

/// `GET /api/logs?limit=` parameters.
///
/// The limit is clamped to `1..=100` by the log repository.
#[derive(Debug, Default, Deserialize)]
pub struct LogListParams {
    pub limit: Option<i64>,
}
