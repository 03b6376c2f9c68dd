//! Integration tests for the PostgreSQL form repository
//!
//! Run with: cargo test -p evaluations-control-plane --test postgres_storage_test -- --test-threads=1
//!
//! Requirements:
//! - PostgreSQL running with DATABASE_URL set; without it every test is skipped
//! - Migrations are applied by the tests themselves

use chrono::{TimeZone, Utc};
use evaluations_control_plane::storage::{Database, UpsertFormRow};

/// Connect and migrate, or None when DATABASE_URL is unset
async fn database() -> Option<Database> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL storage test");
        return None;
    };
    let db = Database::from_url(&url)
        .await
        .expect("Failed to connect to PostgreSQL");
    db.migrate().await.expect("Failed to run migrations");
    Some(db)
}

/// Unique form number so concurrent runs do not collide
fn unique_number(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

fn row(number: &str, status_id: i64) -> UpsertFormRow {
    UpsertFormRow {
        date: Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
        number: number.to_string(),
        evaluation: "ok".to_string(),
        status_id,
        provider_id: 10,
        category_id: 20,
        appraiser_id: 30,
    }
}

#[tokio::test]
async fn test_statuses_are_seeded() {
    let Some(db) = database().await else { return };

    let statuses = db.list_statuses().await.unwrap();
    let names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, vec!["Pending", "In Review", "Approved", "Rejected"]);
    assert_eq!(db.get_status(3).await.unwrap().unwrap().name, "Approved");
    assert!(db.get_status(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_get_list_join_status_name() {
    let Some(db) = database().await else { return };
    let number = unique_number("PG-CREATE");

    let created = db.create_form(row(&number, 1)).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.number, number);
    assert_eq!(created.status_id, 1);
    assert_eq!(created.status_name, "Pending");
    assert_eq!(created.date, Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap());

    let fetched = db.get_form(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.number, number);
    assert_eq!(fetched.status_name, "Pending");
    assert_eq!(fetched.provider_id, 10);
    assert_eq!(fetched.category_id, 20);
    assert_eq!(fetched.appraiser_id, 30);

    let listed = db.list_forms().await.unwrap();
    let found = listed.iter().find(|f| f.id == created.id).unwrap();
    assert_eq!(found.status_name, "Pending");

    db.delete_form(created.id).await.unwrap();
}

#[tokio::test]
async fn test_update_replaces_row() {
    let Some(db) = database().await else { return };
    let created = db
        .create_form(row(&unique_number("PG-UPDATE"), 1))
        .await
        .unwrap();

    let mut input = row(&unique_number("PG-UPDATED"), 3);
    input.evaluation = "revised".to_string();
    input.provider_id = 11;
    let updated = db.update_form(created.id, input.clone()).await.unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.number, input.number);
    assert_eq!(updated.evaluation, "revised");
    assert_eq!(updated.status_id, 3);
    assert_eq!(updated.status_name, "Approved");
    assert_eq!(updated.provider_id, 11);

    db.delete_form(created.id).await.unwrap();
}

#[tokio::test]
async fn test_update_missing_form_returns_none() {
    let Some(db) = database().await else { return };

    let updated = db
        .update_form(i64::MAX, row(&unique_number("PG-MISSING"), 1))
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_reports_whether_row_existed() {
    let Some(db) = database().await else { return };
    let created = db
        .create_form(row(&unique_number("PG-DELETE"), 1))
        .await
        .unwrap();

    assert!(db.delete_form(created.id).await.unwrap());
    assert!(!db.delete_form(created.id).await.unwrap());
    assert!(!db.delete_form(i64::MAX).await.unwrap());
    assert!(db.get_form(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_status_violates_foreign_key() {
    let Some(db) = database().await else { return };
    let number = unique_number("PG-FK");

    let err = db.create_form(row(&number, 99)).await.unwrap_err();

    assert!(format!("{:#}", err).contains("forms_status_id_fkey"));
    let listed = db.list_forms().await.unwrap();
    assert!(listed.iter().all(|f| f.number != number));
}
