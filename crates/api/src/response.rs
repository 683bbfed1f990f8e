//! Shared response body types for API handlers.

use facegate_core::types::UserId;
use serde::Serialize;

/// Acknowledgement returned by endpoints that have no entity to echo back.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    pub id: UserId,
}
