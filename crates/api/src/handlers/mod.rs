//! Request handlers.
//!
//! Each submodule provides async handler functions for one table. Handlers
//! validate input before touching storage, delegate to the [`Storage`]
//! backend in [`AppState`], and map errors via [`AppError`].
//!
//! [`Storage`]: facegate_db::store::Storage
//! [`AppState`]: crate::state::AppState
//! [`AppError`]: crate::error::AppError

pub mod logs;
pub mod users;

use facegate_core::error::CoreError;

/// A required text field counts as missing when absent or empty.
/// Whitespace is content and is accepted as-is.
fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Reject the request if any of the named required fields is missing.
fn require_fields(fields: &[(&'static str, &Option<String>)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| is_missing(value))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}
