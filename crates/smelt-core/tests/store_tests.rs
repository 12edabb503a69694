mod common;

use common::{all_stores, create_test_db};
use smelt_core::{Database, ParsedStep, RoadmapStore, SmeltError};
use tempfile::TempDir;

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.all_steps().expect("Failed to list steps").is_empty());
    db.close().expect("Failed to close database");
}

#[test]
fn test_missing_parent_directory_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("memory").join("nested").join("roadmap.db");

    let db = Database::new(&db_path).expect("Failed to create nested database");

    assert!(db_path.is_file());
    db.close().unwrap();
}

#[test]
fn test_next_step_follows_id_order() {
    for (_file, mut store) in all_stores() {
        assert!(store.next_step().unwrap().is_none());

        let first = store.add_step("Set up database").unwrap();
        let second = store.add_step("Add authentication").unwrap();
        assert!(second > first);

        assert_eq!(store.next_step().unwrap().unwrap().id, first);
        store.mark_done(first).unwrap();
        assert_eq!(store.next_step().unwrap().unwrap().id, second);
        store.mark_done(second).unwrap();
        assert!(store.next_step().unwrap().is_none());

        store.close().unwrap();
    }
}

#[test]
fn test_reset_reopens_step() {
    for (_file, mut store) in all_stores() {
        let first = store.add_step("First").unwrap();
        store.add_step("Second").unwrap();
        store.mark_done(first).unwrap();

        store.reset_step(first).unwrap();

        let next = store.next_step().unwrap().unwrap();
        assert_eq!(next.id, first);
        assert!(!next.done);
    }
}

#[test]
fn test_unknown_ids_are_step_not_found() {
    for (_file, mut store) in all_stores() {
        let id = store.add_step("Only step").unwrap();
        store.remove_step(id).unwrap();

        for result in [
            store.mark_done(id),
            store.reset_step(id),
            store.remove_step(id),
            store.mark_done(999),
        ] {
            let err = result.unwrap_err();
            assert!(matches!(err, SmeltError::StepNotFound { .. }));
            assert!(err.is_storage_fault());
        }
    }
}

#[test]
fn test_empty_descriptions_are_rejected() {
    for (_file, mut store) in all_stores() {
        for description in ["", "   ", "\n\t"] {
            let err = store.add_step(description).unwrap_err();
            assert!(matches!(err, SmeltError::InvalidInput { .. }));
            assert!(err.is_storage_fault());
        }
        assert!(store.all_steps().unwrap().is_empty());
    }
}

#[test]
fn test_descriptions_round_trip_unchanged() {
    let description = "  Add \"quoted\" text, unicode ✓ and\nnewlines  ";

    for (_file, mut store) in all_stores() {
        let id = store.add_step(description).unwrap();

        let steps = store.all_steps().unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].id, id);
        assert_eq!(steps[0].description, description);
    }
}

#[test]
fn test_all_steps_ascending_after_removal() {
    for (_file, mut store) in all_stores() {
        let ids: Vec<u64> = ["A", "B", "C", "D"]
            .iter()
            .map(|d| store.add_step(d).unwrap())
            .collect();
        store.remove_step(ids[1]).unwrap();
        let e = store.add_step("E").unwrap();

        let listed: Vec<u64> = store.all_steps().unwrap().iter().map(|s| s.id).collect();
        assert_eq!(listed, vec![ids[0], ids[2], ids[3], e]);
        assert!(e > ids[3]);
    }
}

#[test]
fn test_import_keeps_order_and_done_hints() {
    for (_file, mut store) in all_stores() {
        store.add_step("Existing step").unwrap();

        let ids = store
            .import_steps(&[
                ParsedStep::new("Create the users table", true),
                ParsedStep::new("Add password hashing", false),
            ])
            .unwrap();

        let steps = store.all_steps().unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].id, ids[0]);
        assert_eq!(steps[1].description, "Create the users table");
        assert!(steps[1].done);
        assert!(!steps[2].done);
        assert_eq!(store.next_step().unwrap().unwrap().description, "Existing step");
    }
}

#[test]
fn test_import_with_invalid_step_adds_nothing() {
    for (_file, mut store) in all_stores() {
        let err = store
            .import_steps(&[ParsedStep::new("Valid", false), ParsedStep::new(" ", false)])
            .unwrap_err();

        assert!(matches!(err, SmeltError::InvalidInput { .. }));
        assert!(store.all_steps().unwrap().is_empty());
    }
}

#[test]
fn test_steps_persist_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("roadmap.db");

    let mut db = Database::new(&db_path).unwrap();
    let id = db.add_step("Implement login").unwrap();
    db.mark_done(id).unwrap();
    db.add_step("Add logout").unwrap();
    db.close().unwrap();

    let db = Database::new(&db_path).unwrap();
    let steps = db.all_steps().unwrap();
    assert_eq!(steps.len(), 2);
    assert!(steps[0].done);
    assert_eq!(db.next_step().unwrap().unwrap().description, "Add logout");
    db.close().unwrap();
}

#[test]
fn test_ids_not_reused_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("roadmap.db");

    let mut db = Database::new(&db_path).unwrap();
    let first = db.add_step("First").unwrap();
    db.remove_step(first).unwrap();
    db.close().unwrap();

    let mut db = Database::new(&db_path).unwrap();
    let second = db.add_step("Second").unwrap();
    assert!(second > first);
}

#[test]
fn test_foreign_steps_table_is_corrupted_schema() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("roadmap.db");
    rusqlite::Connection::open(&db_path)
        .unwrap()
        .execute_batch("CREATE TABLE steps (id INTEGER PRIMARY KEY, title TEXT);")
        .unwrap();

    let err = match Database::new(&db_path) {
        Ok(_) => panic!("schema check should fail"),
        Err(err) => err,
    };

    assert!(matches!(err, SmeltError::Schema { .. }));
    assert!(err.is_storage_fault());
    let message = err.to_string();
    assert!(message.contains("Corrupted schema"));
    assert!(message.contains("description"));
    assert!(message.contains("done"));
}

#[test]
fn test_unopenable_path_is_storage_fault() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way").unwrap();

    let err = match Database::new(blocker.join("roadmap.db")) {
        Ok(_) => panic!("opening below a file should fail"),
        Err(err) => err,
    };

    assert!(err.is_storage_fault());
}
