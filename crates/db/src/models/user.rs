//! User entity model and DTOs.

use facegate_core::descriptor;
use facegate_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// `descriptor` is the raw stored text and is NOT guaranteed to be valid.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub rank: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub unit: Option<String>,
    pub photo: String,
    pub descriptor: Option<String>,
    pub created_at: Timestamp,
}

/// List-view user row: every field except the descriptor payload.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub rank: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub unit: Option<String>,
    pub photo: String,
    pub has_descriptor: bool,
    /// Always `None`; list responses never carry descriptor content.
    #[sqlx(skip)]
    pub descriptor: Option<Vec<f64>>,
    pub created_at: Timestamp,
}

/// Single-user representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub rank: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub unit: Option<String>,
    pub photo: String,
    pub has_descriptor: bool,
    pub descriptor: Option<Vec<f64>>,
    pub created_at: Timestamp,
}

impl UserResponse {
    /// Build the response view of a stored user.
    ///
    /// A stored descriptor that no longer decodes to 128 numbers is reported
    /// as `null` and logged at warn level; the read itself still succeeds.
    /// `has_descriptor` follows what is stored, as in the list view.
    pub fn from_user(user: User) -> Self {
        let has_descriptor = user.descriptor.is_some();
        let descriptor = user.descriptor.as_deref().and_then(|text| {
            let parsed = descriptor::decode_stored(text);
            if parsed.is_none() {
                tracing::warn!(user_id = %user.id, "Stored descriptor is invalid, returning null");
            }
            parsed
        });

        Self {
            id: user.id,
            name: user.name,
            rank: user.rank,
            id_card: user.id_card,
            phone: user.phone,
            unit: user.unit,
            photo: user.photo,
            has_descriptor,
            descriptor,
            created_at: user.created_at,
        }
    }
}

/// Request body for `POST /api/users`.
///
/// Required fields are `Option` so their absence is reported as a
/// validation error. `descriptor` may be a JSON array or its serialized text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub rank: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub unit: Option<String>,
    pub photo: Option<String>,
    pub descriptor: Option<Value>,
}

/// Request body for `PUT /api/users/{id}`. All fields are optional.
///
/// A field that is omitted or sent as `null` keeps its stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: Option<String>,
    pub rank: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub unit: Option<String>,
    pub photo: Option<String>,
    pub descriptor: Option<Value>,
}

/// A validated user ready for insertion. `descriptor` is already encoded.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub name: String,
    pub rank: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub unit: Option<String>,
    pub photo: String,
    pub descriptor: Option<String>,
}

/// A validated partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub rank: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub unit: Option<String>,
    pub photo: Option<String>,
    pub descriptor: Option<String>,
}
