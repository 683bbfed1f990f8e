use std::path::PathBuf;

/// Request bodies above this size are rejected (photos travel inline).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Directory served for any path no API route matches.
    pub static_dir: PathBuf,
    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default      |
    /// |--------------------|--------------|
    /// | `HOST`             | `0.0.0.0`    |
    /// | `PORT`             | `3000`       |
    /// | `CORS_ORIGINS`     | `*`          |
    /// | `STATIC_DIR`       | `../public`  |
    /// | `BODY_LIMIT_BYTES` | `10485760`   |
    /// | `LOG_FORMAT`       | `pretty`     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins =
            parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "../public".into())
            .into();

        let body_limit_bytes: usize = std::env::var("BODY_LIMIT_BYTES")
            .map(|raw| raw.parse().expect("BODY_LIMIT_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        let log_format = std::env::var("LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or(LogFormat::Pretty);

        Self {
            host,
            port,
            cors_origins,
            static_dir,
            body_limit_bytes,
            log_format,
        }
    }

    /// Whether the CORS policy accepts requests from any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
