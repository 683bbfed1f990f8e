//! Shared helpers for API integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`
//! (no TCP listener). Storage is an in-process `MemoryStore`, or
//! [`FailingStore`] to exercise error paths.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use facegate_api::config::{LogFormat, ServerConfig, DEFAULT_BODY_LIMIT_BYTES};
use facegate_api::router::build_app_router;
use facegate_api::state::AppState;
use facegate_core::descriptor::DESCRIPTOR_LENGTH;
use facegate_db::memory::MemoryStore;
use facegate_db::models::check_in_log::{CheckInLog, NewCheckInLog};
use facegate_db::models::user::{NewUser, User, UserChanges, UserSummary};
use facegate_db::store::{LogStore, Storage, UserStore};
use facegate_db::StoreError;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and the fixture
/// directory as the static root.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/public").into(),
        body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over `store` with the test config.
pub fn build_test_app(store: Arc<dyn Storage>) -> Router {
    build_test_app_with(store, test_config())
}

pub fn build_test_app_with(store: Arc<dyn Storage>, config: ServerConfig) -> Router {
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// A fresh in-memory store plus a router over it.
pub fn memory_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app(store.clone());
    (store, app)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A well-formed descriptor as a JSON array.
pub fn sample_descriptor() -> Value {
    let components: Vec<f64> = (0..DESCRIPTOR_LENGTH).map(|i| i as f64 / 256.0).collect();
    serde_json::json!(components)
}

/// A complete registration body.
pub fn user_body(id: &str, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "rank": "Corporal",
        "idCard": "880808-1000000",
        "phone": "010-2222-3333",
        "unit": "2nd Battalion",
        "photo": "data:image/png;base64,iVBORw0KGgo=",
        "descriptor": sample_descriptor(),
    })
}

pub fn new_user(id: &str, descriptor: Option<&str>) -> NewUser {
    NewUser {
        id: id.to_string(),
        name: "Stored".to_string(),
        rank: None,
        id_card: None,
        phone: None,
        unit: None,
        photo: "photo.png".to_string(),
        descriptor: descriptor.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Failing backend
// ---------------------------------------------------------------------------

/// Storage backend whose every call fails with the error produced by `make`.
pub struct FailingStore {
    pub make: fn() -> StoreError,
}

impl FailingStore {
    pub fn database() -> Self {
        Self {
            make: || StoreError::Database(sqlx::Error::Protocol("connection reset".into())),
        }
    }

    pub fn exhausted() -> Self {
        Self {
            make: || StoreError::Unavailable,
        }
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn list_users(&self) -> Result<Vec<UserSummary>, StoreError> {
        Err((self.make)())
    }

    async fn find_user(&self, _id: &str) -> Result<Option<User>, StoreError> {
        Err((self.make)())
    }

    async fn create_user(&self, _input: &NewUser) -> Result<User, StoreError> {
        Err((self.make)())
    }

    async fn update_user(
        &self,
        _id: &str,
        _changes: &UserChanges,
    ) -> Result<Option<User>, StoreError> {
        Err((self.make)())
    }

    async fn delete_user(&self, _id: &str) -> Result<bool, StoreError> {
        Err((self.make)())
    }
}

#[async_trait]
impl LogStore for FailingStore {
    async fn append_log(&self, _input: &NewCheckInLog) -> Result<CheckInLog, StoreError> {
        Err((self.make)())
    }

    async fn recent_logs(&self, _limit: i64) -> Result<Vec<CheckInLog>, StoreError> {
        Err((self.make)())
    }
}

#[async_trait]
impl Storage for FailingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err((self.make)())
    }
}
