//! Persistence and workflow tests against a real SQLite file.

use maricheck::config::SecurityConfig;
use maricheck::db::Store;
use maricheck::domain::{CrewId, CrewStatus, RecordError};
use maricheck::models::crew::CrewRegistration;
use std::time::Duration;
use tempfile::TempDir;

/// Opens a store in a fresh directory. Dropping the `TempDir` removes the
/// database together with its `-wal`/`-shm` files.
async fn test_store() -> (Store, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db_path = dir.path().join("maricheck-test.db");
    let store = Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to open test store");
    (store, dir)
}

fn fast_hashing() -> SecurityConfig {
    SecurityConfig {
        argon2_memory_cost_kib: 1024,
        argon2_time_cost: 1,
        argon2_parallelism: 1,
    }
}

#[tokio::test]
async fn register_then_track_by_passport() {
    let (store, _dir) = test_store().await;

    let created = store
        .create_crew_member(&CrewRegistration::new("  Ana Reyes ", "Chief Officer", "p1234567"))
        .await
        .unwrap();

    assert_eq!(created.name, "Ana Reyes");
    assert_eq!(created.passport, "P1234567");
    assert_eq!(created.status, CrewStatus::Registered);

    let tracked = store
        .get_crew_member_by_passport(" p1234567 ")
        .await
        .unwrap()
        .expect("record should be found by passport");
    assert_eq!(tracked.id, created.id);
    assert_eq!(tracked.status.label(), "Registered");
}

#[tokio::test]
async fn duplicate_passport_is_rejected_regardless_of_case() {
    let (store, _dir) = test_store().await;

    store
        .create_crew_member(&CrewRegistration::new("Ana Reyes", "Chief Officer", "AB123"))
        .await
        .unwrap();

    let err = store
        .create_crew_member(&CrewRegistration::new("Someone Else", "Bosun", " ab123"))
        .await
        .unwrap_err();
    assert!(matches!(err, RecordError::Duplicate(_)), "got {err:?}");

    assert_eq!(store.list_crew_members().await.unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_registration_is_not_stored() {
    let (store, _dir) = test_store().await;

    let err = store
        .create_crew_member(&CrewRegistration::new("", "Bosun", "X1"))
        .await
        .unwrap_err();
    assert!(matches!(err, RecordError::Validation(_)));

    let err = store
        .create_crew_member(&CrewRegistration::new("Ana", "Bosun", "X 1"))
        .await
        .unwrap_err();
    assert!(matches!(err, RecordError::Validation(_)));

    let mut registration = CrewRegistration::new("Ana", "Bosun", "X1");
    registration.date_of_birth = Some("12/01/1990".to_string());
    let err = store.create_crew_member(&registration).await.unwrap_err();
    assert!(matches!(err, RecordError::Validation(_)));

    assert!(store.list_crew_members().await.unwrap().is_empty());
}

#[tokio::test]
async fn optional_fields_are_persisted() {
    let (store, _dir) = test_store().await;

    let mut registration = CrewRegistration::new("Ana Reyes", "Second Engineer", "E998877");
    registration.nationality = Some("Philippines".to_string());
    registration.date_of_birth = Some("1990-04-12".to_string());
    registration.years_experience = Some("9".to_string());
    registration.last_vessel_type = Some("  ".to_string());

    let created = store.create_crew_member(&registration).await.unwrap();
    let loaded = store.get_crew_member(created.id).await.unwrap().unwrap();

    assert_eq!(loaded.nationality.as_deref(), Some("Philippines"));
    assert_eq!(
        loaded.date_of_birth,
        chrono::NaiveDate::from_ymd_opt(1990, 4, 12)
    );
    assert_eq!(loaded.years_experience, Some(9));
    assert_eq!(loaded.last_vessel_type, None);
    assert_eq!(loaded.availability_date, None);
}

#[tokio::test]
async fn advance_walks_every_stage_then_stops() {
    let (store, _dir) = test_store().await;
    let member = store
        .create_crew_member(&CrewRegistration::new("Ana Reyes", "Chief Officer", "P1"))
        .await
        .unwrap();

    let mut seen = vec![member.status];
    for _ in 0..3 {
        seen.push(store.advance_status(member.id).await.unwrap().status);
    }
    assert_eq!(seen, CrewStatus::ALL.to_vec());

    let err = store.advance_status(member.id).await.unwrap_err();
    assert!(matches!(err, RecordError::AlreadyAtMax));

    let after = store.get_crew_member(member.id).await.unwrap().unwrap();
    assert_eq!(after.status, CrewStatus::Approved);
}

#[tokio::test]
async fn advance_unknown_id_is_not_found() {
    let (store, _dir) = test_store().await;

    let err = store.advance_status(CrewId::new(4242)).await.unwrap_err();
    assert!(matches!(err, RecordError::NotFound(_)));
}

#[tokio::test]
async fn unknown_and_malformed_passports_track_to_none() {
    let (store, _dir) = test_store().await;
    store
        .create_crew_member(&CrewRegistration::new("Ana Reyes", "Chief Officer", "P1"))
        .await
        .unwrap();

    assert!(store.get_crew_member_by_passport("P2").await.unwrap().is_none());
    assert!(store.get_crew_member_by_passport("").await.unwrap().is_none());
    assert!(store.get_crew_member_by_passport("P1' OR 1=1 --").await.unwrap().is_none());
}

#[tokio::test]
async fn list_is_newest_first_and_stats_count_per_stage() {
    let (store, _dir) = test_store().await;

    let mut ids = Vec::new();
    for (i, passport) in ["A1", "A2", "A3"].iter().enumerate() {
        let member = store
            .create_crew_member(&CrewRegistration::new(format!("Sailor {i}"), "AB", *passport))
            .await
            .unwrap();
        ids.push(member.id);
    }

    store.advance_status(ids[0]).await.unwrap();
    store.advance_status(ids[0]).await.unwrap();
    store.advance_status(ids[1]).await.unwrap();

    let listed: Vec<CrewId> = store
        .list_crew_members()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);

    let stats = store.crew_stats().await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.registered, 1);
    assert_eq!(stats.screening, 1);
    assert_eq!(stats.documents_verified, 1);
    assert_eq!(stats.approved, 0);
}

#[tokio::test]
async fn concurrent_duplicate_registrations_admit_exactly_one() {
    let (store, _dir) = test_store().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create_crew_member(&CrewRegistration::new(format!("Racer {i}"), "AB", "RACE-1"))
                .await
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(RecordError::Duplicate(_)) => {}
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(store.list_crew_members().await.unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_advances_never_skip_or_overshoot() {
    let (store, _dir) = test_store().await;
    let member = store
        .create_crew_member(&CrewRegistration::new("Ana Reyes", "Chief Officer", "P1"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..6 {
        let store = store.clone();
        let id = member.id;
        handles.push(tokio::spawn(async move { store.advance_status(id).await }));
    }

    let mut advanced = Vec::new();
    let mut at_max = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(m) => advanced.push(m.status),
            Err(RecordError::AlreadyAtMax) => at_max += 1,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    advanced.sort_by_key(|s| s.value());
    assert_eq!(
        advanced,
        vec![
            CrewStatus::Screening,
            CrewStatus::DocumentsVerified,
            CrewStatus::Approved
        ]
    );
    assert_eq!(at_max, 3);

    let after = store.get_crew_member(member.id).await.unwrap().unwrap();
    assert_eq!(after.status, CrewStatus::Approved);
}

#[tokio::test]
async fn admin_credentials_verify_only_exact_password() {
    let (store, _dir) = test_store().await;

    store
        .create_admin_with_config("harbor", "s3cret-Pass", &fast_hashing())
        .await
        .unwrap();

    assert!(store.verify_admin_credentials("harbor", "s3cret-Pass", &fast_hashing()).await.unwrap());
    assert!(!store.verify_admin_credentials("harbor", "s3cret-Pasz", &fast_hashing()).await.unwrap());
    assert!(!store.verify_admin_credentials("harbor", "", &fast_hashing()).await.unwrap());
    assert!(!store.verify_admin_credentials("nobody", "s3cret-Pass", &fast_hashing()).await.unwrap());

    let admin = store.get_admin_by_username("harbor").await.unwrap().unwrap();
    assert_eq!(admin.username, "harbor");
}

#[tokio::test]
async fn admin_usernames_are_unique() {
    let (store, _dir) = test_store().await;

    store
        .create_admin_with_config("harbor", "one", &fast_hashing())
        .await
        .unwrap();
    let err = store
        .create_admin_with_config(" harbor ", "two", &fast_hashing())
        .await
        .unwrap_err();
    assert!(matches!(err, RecordError::Duplicate(_)));

    let err = store
        .create_admin_with_config("  ", "two", &fast_hashing())
        .await
        .unwrap_err();
    assert!(matches!(err, RecordError::Validation(_)));

    assert_eq!(store.count_admins().await.unwrap(), 1);
}

#[tokio::test]
async fn advance_touches_updated_at_only() {
    let (store, _dir) = test_store().await;
    let member = store
        .create_crew_member(&CrewRegistration::new("Ana Reyes", "Chief Officer", "P1"))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;

    let advanced = store.advance_status(member.id).await.unwrap();
    assert_eq!(advanced.created_at, member.created_at);
    assert_ne!(advanced.updated_at, member.updated_at);
    let parse = |ts: &str| chrono::DateTime::parse_from_rfc3339(ts).unwrap();
    assert!(parse(&advanced.updated_at) > parse(&member.updated_at));

    let reloaded = store.get_crew_member(member.id).await.unwrap().unwrap();
    assert_eq!(reloaded.created_at, member.created_at);
    assert_eq!(reloaded.updated_at, advanced.updated_at);
}

#[tokio::test]
async fn test_store_removes_database_on_drop() {
    let (store, dir) = test_store().await;
    let root = dir.path().to_path_buf();
    store
        .create_crew_member(&CrewRegistration::new("Ana Reyes", "Chief Officer", "P1"))
        .await
        .unwrap();
    assert!(root.join("maricheck-test.db").exists());

    drop(store);
    drop(dir);
    assert!(!root.exists());
}

#[tokio::test]
async fn unusable_database_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let url = format!("sqlite:{}", blocker.join("crew.db").display());
    let err = Store::new(&url).await.err().expect("store should not open");
    assert!(
        format!("{err:#}").contains("Failed to create database directory"),
        "got {err:#}"
    );
}
