//! Repository behaviour against a real SQLite file

mod support;

use std::sync::Arc;

use bitacora_core::{ActivityRepository, ActivityService, UserRepository};
use bitacora_domain::{BitacoraError, DateRange, NewUser};
use bitacora_infra::{SqliteActivityRepository, SqliteUserRepository};
use chrono::NaiveDate;
use support::{activity_fields, TestDatabase};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Ana".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$stub".to_string(),
    }
}

#[test]
fn test_activity_round_trip_preserves_values() {
    let db = TestDatabase::new();
    let service = ActivityService::new(Arc::new(SqliteActivityRepository::new(db.manager.clone())));

    let recorded = service.record(activity_fields("2025-03-06")).unwrap();
    let found = service.query("2025-03-06", "2025-03-06").unwrap();

    assert_eq!(found, vec![recorded]);
    assert_eq!(found[0].attachments, "photos.zip");
    assert_eq!(found[0].weather, "");
    assert_eq!(found[0].status, None);
}

#[test]
fn test_range_query_is_inclusive_and_sorted() {
    let db = TestDatabase::new();
    let repo = SqliteActivityRepository::new(db.manager.clone());
    let service = ActivityService::new(Arc::new(SqliteActivityRepository::new(db.manager.clone())));

    for date in ["2025-03-10", "2025-02-28", "2025-03-01", "2025-03-10", "2025-03-11"] {
        service.record(activity_fields(date)).unwrap();
    }

    let range = DateRange::new(day(2025, 3, 1), day(2025, 3, 10)).unwrap();
    let found = repo.find_by_date_range(&range).unwrap();

    let keys: Vec<(String, i64)> = found.iter().map(|a| (a.date.to_string(), a.id)).collect();
    assert_eq!(
        keys,
        vec![
            ("2025-03-01".to_string(), 3),
            ("2025-03-10".to_string(), 1),
            ("2025-03-10".to_string(), 4),
        ]
    );
}

#[test]
fn test_classification_columns_read_back() {
    let db = TestDatabase::new();
    db.execute_batch(
        "INSERT INTO activities (date, supervisor, description, responsible, status, kind)
         VALUES ('2025-03-06', 'Juan', 'Legacy row', 'Ana', 'closed', 'safety');",
    );

    let repo = SqliteActivityRepository::new(db.manager.clone());
    let found = repo.find_by_date_range(&DateRange::single_day(day(2025, 3, 6))).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].status.as_deref(), Some("closed"));
    assert_eq!(found[0].kind.as_deref(), Some("safety"));
    assert_eq!(found[0].attachments, "");
}

#[test]
fn test_recorded_by_references_user() {
    let db = TestDatabase::new();
    let users = SqliteUserRepository::new(db.manager.clone());
    let user = users.insert(new_user("a@b.c")).unwrap();

    let service = ActivityService::new(Arc::new(SqliteActivityRepository::new(db.manager.clone())));
    let mut fields = activity_fields("2025-03-06");
    fields.recorded_by = Some(user.id);
    service.record(fields).unwrap();

    let found = service.query("2025-03-06", "2025-03-06").unwrap();
    assert_eq!(found[0].recorded_by, Some(user.id));
}

#[test]
fn test_user_insert_and_lookup() {
    let db = TestDatabase::new();
    let users = SqliteUserRepository::new(db.manager.clone());

    let created = users.insert(new_user("a@b.c")).unwrap();
    let stored = users.find_by_email("a@b.c").unwrap().expect("user should exist");

    assert_eq!(stored.user, created);
    assert_eq!(stored.password_hash, "$argon2id$stub");
    assert!(users.find_by_email("missing@b.c").unwrap().is_none());
}

#[test]
fn test_unique_email_maps_to_duplicate() {
    let db = TestDatabase::new();
    let users = SqliteUserRepository::new(db.manager.clone());

    users.insert(new_user("a@b.c")).unwrap();
    let err = users.insert(new_user("a@b.c")).unwrap_err();

    assert_eq!(err, BitacoraError::DuplicateEmail("a@b.c".to_string()));
}

#[test]
fn test_update_password_hash() {
    let db = TestDatabase::new();
    let users = SqliteUserRepository::new(db.manager.clone());
    let created = users.insert(new_user("a@b.c")).unwrap();

    users.update_password_hash(created.id, "$argon2id$new").unwrap();
    let stored = users.find_by_email("a@b.c").unwrap().unwrap();
    assert_eq!(stored.password_hash, "$argon2id$new");

    let err = users.update_password_hash(9999, "$argon2id$x").unwrap_err();
    assert!(matches!(err, BitacoraError::UserNotFound(_)));
}

#[test]
fn test_data_survives_reopen() {
    let db = TestDatabase::new();
    let path = db.manager.path().to_path_buf();
    {
        let users = SqliteUserRepository::new(db.manager.clone());
        users.insert(new_user("kept@b.c")).unwrap();
    }

    let reopened = bitacora_infra::DbManager::new(&path, 1).unwrap();
    reopened.run_migrations().unwrap();
    let users = SqliteUserRepository::new(Arc::new(reopened));
    assert!(users.find_by_email("kept@b.c").unwrap().is_some());
}
