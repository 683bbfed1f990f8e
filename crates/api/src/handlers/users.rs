//! Handlers for registered users.
//!
//! Endpoints:
//! - GET    /api/users
//! - POST   /api/users
//! - GET    /api/users/{id}
//! - PUT    /api/users/{id}
//! - DELETE /api/users/{id}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use facegate_core::descriptor;
use facegate_core::error::CoreError;
use facegate_core::types::UserId;
use facegate_db::models::user::{CreateUser, NewUser, UpdateUser, UserChanges, UserResponse};
use facegate_db::StoreError;
use serde_json::Value;

use super::require_fields;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

fn user_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "User",
        id: id.to_string(),
    })
}

/// Validate and encode an optional request descriptor.
fn encode_descriptor(value: Option<&Value>) -> Result<Option<String>, CoreError> {
    descriptor::require_valid(value)?
        .map(|components| descriptor::encode(&components))
        .transpose()
}

/// Validate registration input: `id`, `name` and `photo` are required and
/// the descriptor, if any, must be well formed.
fn validate_create_input(input: CreateUser) -> AppResult<NewUser> {
    require_fields(&[
        ("id", &input.id),
        ("name", &input.name),
        ("photo", &input.photo),
    ])?;
    let descriptor = encode_descriptor(input.descriptor.as_ref())?;

    Ok(NewUser {
        id: input.id.unwrap_or_default(),
        name: input.name.unwrap_or_default(),
        rank: input.rank,
        id_card: input.id_card,
        phone: input.phone,
        unit: input.unit,
        photo: input.photo.unwrap_or_default(),
        descriptor,
    })
}

/// Validate a partial update. Only the descriptor has content rules.
fn validate_update_input(input: UpdateUser) -> AppResult<UserChanges> {
    let descriptor = encode_descriptor(input.descriptor.as_ref())?;

    Ok(UserChanges {
        name: input.name,
        rank: input.rank,
        id_card: input.id_card,
        phone: input.phone,
        unit: input.unit,
        photo: input.photo,
        descriptor,
    })
}

/// GET /api/users
///
/// List every user without descriptor payloads; `hasDescriptor` reports
/// whether one is stored.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = state.store.list_users().await?;

    Ok(Json(users))
}

/// GET /api/users/{id}
///
/// Retrieve one user including the descriptor. A corrupted stored
/// descriptor is returned as `null`.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .store
        .find_user(&id)
        .await?
        .ok_or_else(|| user_not_found(&id))?;

    Ok(Json(UserResponse::from_user(user)))
}

/// POST /api/users
///
/// Register a new user. Fails with 409 if the id is already taken.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let new_user = validate_create_input(input)?;

    let user = match state.store.create_user(&new_user).await {
        Ok(user) => user,
        Err(StoreError::Duplicate(_)) => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "User with id {} already exists",
                new_user.id
            ))));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        user_id = %user.id,
        has_descriptor = user.descriptor.is_some(),
        "User registered",
    );

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(user))))
}

/// PUT /api/users/{id}
///
/// Partially update a user. Omitted or `null` fields keep their stored
/// value.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let changes = validate_update_input(input)?;

    let user = state
        .store
        .update_user(&id, &changes)
        .await?
        .ok_or_else(|| user_not_found(&id))?;

    tracing::info!(
        user_id = %user.id,
        descriptor_replaced = changes.descriptor.is_some(),
        "User updated",
    );

    Ok(Json(UserResponse::from_user(user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete_user(&id).await?;

    if !deleted {
        return Err(user_not_found(&id));
    }

    tracing::info!(user_id = %id, "User deleted");

    Ok(Json(MessageResponse {
        message: "User deleted",
        id,
    }))
}
