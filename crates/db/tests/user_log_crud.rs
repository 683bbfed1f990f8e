//! Integration tests for the `users` and `logs` repositories.
//!
//! Exercises the repository layer and `PgStore` against a real database.
//! These need `DATABASE_URL` pointing at a PostgreSQL server the test user
//! may create databases on; run them with `cargo test -- --ignored`.

use assert_matches::assert_matches;
use facegate_core::descriptor::{self, DESCRIPTOR_LENGTH};
use facegate_db::models::check_in_log::NewCheckInLog;
use facegate_db::models::user::{NewUser, UserChanges};
use facegate_db::repositories::{CheckInLogRepo, UserRepo};
use facegate_db::store::{LogStore, PgStore, Storage, UserStore};
use facegate_db::StoreError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(id: &str, name: &str) -> NewUser {
    NewUser {
        id: id.to_string(),
        name: name.to_string(),
        rank: None,
        id_card: Some("900101-1234567".to_string()),
        phone: Some("010-0000-0000".to_string()),
        unit: Some("HQ".to_string()),
        photo: "data:image/jpeg;base64,/9j/".to_string(),
        descriptor: None,
    }
}

fn new_log(user_id: &str, status: &str) -> NewCheckInLog {
    NewCheckInLog {
        user_id: user_id.to_string(),
        user_name: "Choi".to_string(),
        status: status.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_and_find_user(pool: PgPool) {
    let mut input = new_user("B-001", "Choi");
    input.descriptor = Some(descriptor::encode(&vec![0.25; DESCRIPTOR_LENGTH]).unwrap());

    let created = UserRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.id, "B-001");

    let found = UserRepo::find_by_id(&pool, "B-001").await.unwrap().unwrap();
    assert_eq!(found.name, "Choi");
    let stored = descriptor::decode_stored(found.descriptor.as_deref().unwrap()).unwrap();
    assert_eq!(stored.len(), DESCRIPTOR_LENGTH);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_duplicate_id_maps_to_duplicate_error(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    store.create_user(&new_user("B-002", "First")).await.unwrap();

    let result = store.create_user(&new_user("B-002", "Second")).await;
    assert_matches!(result, Err(StoreError::Duplicate(_)));

    let found = UserRepo::find_by_id(&pool, "B-002").await.unwrap().unwrap();
    assert_eq!(found.name, "First");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_summaries_flags_descriptor_presence(pool: PgPool) {
    let mut with = new_user("B-003", "With");
    with.descriptor = Some(descriptor::encode(&vec![0.5; DESCRIPTOR_LENGTH]).unwrap());
    UserRepo::create(&pool, &with).await.unwrap();
    UserRepo::create(&pool, &new_user("B-004", "Without")).await.unwrap();

    let summaries = UserRepo::list_summaries(&pool).await.unwrap();
    assert_eq!(summaries.len(), 2);

    let with = summaries.iter().find(|s| s.id == "B-003").unwrap();
    let without = summaries.iter().find(|s| s.id == "B-004").unwrap();
    assert!(with.has_descriptor);
    assert!(!without.has_descriptor);
    assert!(with.descriptor.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_coalesces_missing_fields(pool: PgPool) {
    UserRepo::create(&pool, &new_user("B-005", "Before")).await.unwrap();

    let changes = UserChanges {
        name: Some("After".to_string()),
        ..Default::default()
    };
    let updated = UserRepo::update(&pool, "B-005", &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.phone.as_deref(), Some("010-0000-0000"));
    assert_eq!(updated.unit.as_deref(), Some("HQ"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_unknown_user_returns_none(pool: PgPool) {
    let result = UserRepo::update(&pool, "missing", &UserChanges::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_delete_nonexistent_user_leaves_table_unchanged(pool: PgPool) {
    UserRepo::create(&pool, &new_user("B-006", "Stay")).await.unwrap();

    assert!(!UserRepo::delete(&pool, "nope").await.unwrap());
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);

    assert!(UserRepo::delete(&pool, "B-006").await.unwrap());
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_log_insert_assigns_id_and_timestamp(pool: PgPool) {
    let entry = CheckInLogRepo::create(&pool, &new_log("B-007", "success"))
        .await
        .unwrap();

    assert!(entry.log_id > 0);
    // YYYY-MM-DD HH:MM:SS
    assert_eq!(entry.timestamp.len(), 19);
    assert_eq!(&entry.timestamp[4..5], "-");
    assert_eq!(&entry.timestamp[10..11], " ");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_recent_logs_are_capped_and_newest_first(pool: PgPool) {
    // Backdate rows so ordering does not depend on insert timing.
    sqlx::query(
        "INSERT INTO logs (user_id, user_name, status, logged_at)
         SELECT 'U' || g, 'Name', 'success', NOW() - (g || ' minutes')::interval
         FROM generate_series(1, 120) AS g",
    )
    .execute(&pool)
    .await
    .unwrap();

    let store = PgStore::new(pool);
    let logs = store.recent_logs(1000).await.unwrap();

    assert_eq!(logs.len(), 100);
    assert_eq!(logs[0].user_id, "U1");
    assert!(logs.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_ping_succeeds(pool: PgPool) {
    PgStore::new(pool).ping().await.unwrap();
}
