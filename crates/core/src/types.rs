/// User primary keys are externally issued badge/card numbers, kept as text.
pub type UserId = String;

/// Check-in log primary keys are PostgreSQL BIGSERIAL.
pub type LogId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Text layout used when rendering log timestamps in API responses.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
