//! Check-in log entity model and DTOs.

use facegate_core::types::{LogId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `logs` table.
///
/// `timestamp` is rendered as `YYYY-MM-DD HH:MM:SS` text when read.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CheckInLog {
    pub log_id: LogId,
    pub user_id: UserId,
    pub user_name: String,
    pub status: String,
    pub timestamp: String,
}

/// Request body for `POST /api/logs`.
///
/// All fields are optional at the type level so a missing field produces a
/// validation error instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckInLog {
    pub user_id: Option<UserId>,
    pub user_name: Option<String>,
    pub status: Option<String>,
}

/// A validated log entry ready for insertion.
#[derive(Debug, Clone)]
pub struct NewCheckInLog {
    pub user_id: UserId,
    pub user_name: String,
    pub status: String,
}
