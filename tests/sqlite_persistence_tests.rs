#![cfg(feature = "sqlite")]

use tempfile::NamedTempFile;
use timetabler::{Assignment, AssignmentStatus, AssignmentStore, LoadOutcome, SqliteAssignmentStore};

#[test]
fn sqlite_store_reports_missing_before_first_save() {
    let store = SqliteAssignmentStore::in_memory().unwrap();
    assert!(store.load_assignments().unwrap().is_missing());
}

#[test]
fn sqlite_store_round_trip_preserves_order_and_status() {
    let file = NamedTempFile::new().unwrap();
    let assignments = vec![
        Assignment::execution("2", "2025-03-10"),
        Assignment::plain("Problem set", "2025-03-08").with_status(AssignmentStatus::Completed),
        Assignment::writeup("2", "2025-03-09"),
    ];

    {
        let store = SqliteAssignmentStore::new(file.path()).unwrap();
        store.save_assignments(&assignments).unwrap();
    }

    let store = SqliteAssignmentStore::new(file.path()).unwrap();
    match store.load_assignments().unwrap() {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded, assignments),
        other => panic!("expected loaded assignments, got {other:?}"),
    }
}

#[test]
fn sqlite_store_save_replaces_previous_rows() {
    let store = SqliteAssignmentStore::in_memory().unwrap();
    store
        .save_assignments(&[
            Assignment::plain("Old", "2025-01-01"),
            Assignment::plain("Older", "2025-01-02"),
        ])
        .unwrap();
    store
        .save_assignments(&[Assignment::writeup("5", "2025-02-01")])
        .unwrap();

    let loaded = store.load_assignments().unwrap().into_assignments();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].display_name(), "Writeup 5");
}

#[test]
fn sqlite_store_saving_empty_list_is_not_missing() {
    let store = SqliteAssignmentStore::in_memory().unwrap();
    store.save_assignments(&[]).unwrap();
    match store.load_assignments().unwrap() {
        LoadOutcome::Loaded(loaded) => assert!(loaded.is_empty()),
        other => panic!("expected empty loaded list, got {other:?}"),
    }
}
