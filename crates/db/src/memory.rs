//! In-process [`Storage`] backend.
//!
//! Mirrors the PostgreSQL semantics that handlers rely on: duplicate ids are
//! rejected, updates only overwrite `Some` fields, and logs come back
//! newest first. Used by the API integration tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use facegate_core::types::{LogId, TIMESTAMP_FORMAT};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::check_in_log::{CheckInLog, NewCheckInLog};
use crate::models::user::{NewUser, User, UserChanges, UserSummary};
use crate::repositories::check_in_log_repo::clamp_limit;
use crate::store::{LogStore, Storage, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<BTreeMap<String, User>>,
    logs: RwLock<Vec<CheckInLog>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

fn summarize(user: &User) -> UserSummary {
    UserSummary {
        id: user.id.clone(),
        name: user.name.clone(),
        rank: user.rank.clone(),
        id_card: user.id_card.clone(),
        phone: user.phone.clone(),
        unit: user.unit.clone(),
        photo: user.photo.clone(),
        has_descriptor: user.descriptor.is_some(),
        descriptor: None,
        created_at: user.created_at,
    }
}

fn overwrite(slot: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *slot = Some(v.clone());
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<UserSummary>, StoreError> {
        let users = self.users.read().await;
        let mut summaries: Vec<UserSummary> = users.values().map(summarize).collect();
        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(summaries)
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn create_user(&self, input: &NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&input.id) {
            return Err(StoreError::Duplicate("users_pkey".into()));
        }
        let user = User {
            id: input.id.clone(),
            name: input.name.clone(),
            rank: input.rank.clone(),
            id_card: input.id_card.clone(),
            phone: input.phone.clone(),
            unit: input.unit.clone(),
            photo: input.photo.clone(),
            descriptor: input.descriptor.clone(),
            created_at: chrono::Utc::now(),
        };
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        id: &str,
        changes: &UserChanges,
    ) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            user.name = name.clone();
        }
        if let Some(photo) = &changes.photo {
            user.photo = photo.clone();
        }
        overwrite(&mut user.rank, &changes.rank);
        overwrite(&mut user.id_card, &changes.id_card);
        overwrite(&mut user.phone, &changes.phone);
        overwrite(&mut user.unit, &changes.unit);
        overwrite(&mut user.descriptor, &changes.descriptor);
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.users.write().await.remove(id).is_some())
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn append_log(&self, input: &NewCheckInLog) -> Result<CheckInLog, StoreError> {
        let mut logs = self.logs.write().await;
        let entry = CheckInLog {
            log_id: logs.len() as LogId + 1,
            user_id: input.user_id.clone(),
            user_name: input.user_name.clone(),
            status: input.status.clone(),
            timestamp: chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        };
        logs.push(entry.clone());
        Ok(entry)
    }

    async fn recent_logs(&self, limit: i64) -> Result<Vec<CheckInLog>, StoreError> {
        let limit = clamp_limit(Some(limit)) as usize;
        let logs = self.logs.read().await;
        Ok(logs.iter().rev().take(limit).cloned().collect())
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
