//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{NewUser, User, UserChanges, UserSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rank, id_card, phone, unit, photo, descriptor, created_at";

/// Columns for list views: the descriptor is reduced to a presence flag.
const SUMMARY_COLUMNS: &str = "id, name, rank, id_card, phone, unit, photo, \
                               descriptor IS NOT NULL AS has_descriptor, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique violation if `input.id` already exists.
    pub async fn create(pool: &PgPool, input: &NewUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, name, rank, id_card, phone, unit, photo, descriptor)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.rank)
            .bind(&input.id_card)
            .bind(&input.phone)
            .bind(&input.unit)
            .bind(&input.photo)
            .bind(&input.descriptor)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users without descriptor payloads, oldest registration first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<UserSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM users ORDER BY created_at, id");
        sqlx::query_as::<_, UserSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a user. Only non-`None` fields in `changes` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        changes: &UserChanges,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                rank = COALESCE($3, rank),
                id_card = COALESCE($4, id_card),
                phone = COALESCE($5, phone),
                unit = COALESCE($6, unit),
                photo = COALESCE($7, photo),
                descriptor = COALESCE($8, descriptor)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.rank)
            .bind(&changes.id_card)
            .bind(&changes.phone)
            .bind(&changes.unit)
            .bind(&changes.photo)
            .bind(&changes.descriptor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all users.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
