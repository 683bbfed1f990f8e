//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor whose rejections are reported as [`AppError`].
///
/// Malformed JSON, wrong field types (e.g. a numeric `id`) and a missing
/// `Content-Type` all become `400 BAD_REQUEST` with the standard error body;
/// oversized bodies become `413`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor whose rejections are reported as [`AppError`].
///
/// A parameter that fails to deserialize (e.g. `?limit=abc`) becomes
/// `400 BAD_REQUEST` with the standard error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
