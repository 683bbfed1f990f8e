//! Repository for the append-only `logs` table.

use sqlx::PgPool;

use crate::models::check_in_log::{CheckInLog, NewCheckInLog};

/// Column list shared across queries. The timestamp is formatted in SQL so
/// every reader sees the same text layout.
const COLUMNS: &str = "log_id, user_id, user_name, status, \
                       to_char(logged_at, 'YYYY-MM-DD HH24:MI:SS') AS \"timestamp\"";

/// Hard cap on rows returned by [`CheckInLogRepo::list_recent`].
pub const MAX_RECENT_LOGS: i64 = 100;

/// Clamp a caller-supplied limit into `1..=MAX_RECENT_LOGS`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(MAX_RECENT_LOGS).clamp(1, MAX_RECENT_LOGS)
}

/// Provides insert and read operations for check-in logs. There is no
/// update or delete.
pub struct CheckInLogRepo;

impl CheckInLogRepo {
    /// Append a log entry. `logged_at` is assigned by the database.
    pub async fn create(pool: &PgPool, input: &NewCheckInLog) -> Result<CheckInLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO logs (user_id, user_name, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CheckInLog>(&query)
            .bind(&input.user_id)
            .bind(&input.user_name)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List the most recent entries, newest first. `limit` is clamped to
    /// `1..=MAX_RECENT_LOGS`.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<CheckInLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM logs
             ORDER BY logged_at DESC, log_id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, CheckInLog>(&query)
            .bind(clamp_limit(Some(limit)))
            .fetch_all(pool)
            .await
    }
}
