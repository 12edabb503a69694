use smelt_core::{Database, MemoryStore, RoadmapStore};
use tempfile::NamedTempFile;

/// Helper function to create a roadmap backed by a temporary SQLite file
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Every store variant, so behaviour can be checked against all of them.
///
/// The temp file is returned alongside so the SQLite file outlives the test
/// body.
pub fn all_stores() -> Vec<(Option<NamedTempFile>, Box<dyn RoadmapStore>)> {
    let (temp_file, db) = create_test_db();
    let sqlite: Box<dyn RoadmapStore> = Box::new(db);
    let memory: Box<dyn RoadmapStore> = Box::new(MemoryStore::new());
    vec![(Some(temp_file), sqlite), (None, memory)]
}
