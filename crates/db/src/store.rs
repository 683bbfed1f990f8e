//! Storage traits consumed by the HTTP layer, and the PostgreSQL backend.
//!
//! Handlers depend on `Arc<dyn Storage>` rather than a pool so the backend is
//! chosen once at startup. [`PgStore`] delegates to the repositories;
//! [`MemoryStore`](crate::memory::MemoryStore) keeps everything in process.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::check_in_log::{CheckInLog, NewCheckInLog};
use crate::models::user::{NewUser, User, UserChanges, UserSummary};
use crate::repositories::{CheckInLogRepo, UserRepo};
use crate::DbPool;

/// Persistence for registered users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, without descriptor payloads.
    async fn list_users(&self) -> Result<Vec<UserSummary>, StoreError>;

    async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Insert a user. Returns [`StoreError::Duplicate`] if the id is taken.
    async fn create_user(&self, input: &NewUser) -> Result<User, StoreError>;

    /// Apply the `Some` fields of `changes`. `None` when the id is unknown.
    async fn update_user(
        &self,
        id: &str,
        changes: &UserChanges,
    ) -> Result<Option<User>, StoreError>;

    /// Returns `true` if a user was removed.
    async fn delete_user(&self, id: &str) -> Result<bool, StoreError>;
}

/// Persistence for the append-only check-in log.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn append_log(&self, input: &NewCheckInLog) -> Result<CheckInLog, StoreError>;

    /// Newest entries first, at most `limit` rows.
    async fn recent_logs(&self, limit: i64) -> Result<Vec<CheckInLog>, StoreError>;
}

/// Everything the HTTP layer needs from a backend.
#[async_trait]
pub trait Storage: UserStore + LogStore {
    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// PostgreSQL backend
// ---------------------------------------------------------------------------

/// [`Storage`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn list_users(&self) -> Result<Vec<UserSummary>, StoreError> {
        Ok(UserRepo::list_summaries(&self.pool).await?)
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_user(&self, input: &NewUser) -> Result<User, StoreError> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn update_user(
        &self,
        id: &str,
        changes: &UserChanges,
    ) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        Ok(UserRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl LogStore for PgStore {
    async fn append_log(&self, input: &NewCheckInLog) -> Result<CheckInLog, StoreError> {
        Ok(CheckInLogRepo::create(&self.pool, input).await?)
    }

    async fn recent_logs(&self, limit: i64) -> Result<Vec<CheckInLog>, StoreError> {
        Ok(CheckInLogRepo::list_recent(&self.pool, limit).await?)
    }
}

#[async_trait]
impl Storage for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
