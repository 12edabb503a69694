//! Step CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, SmeltError},
    models::{ParsedStep, Step},
    roadmap::{validate_description, RoadmapStore},
};

const INSERT_STEP_SQL: &str = "INSERT INTO steps (description) VALUES (?1)";
const IMPORT_STEP_SQL: &str = "INSERT INTO steps (description, done) VALUES (?1, ?2)";
const SELECT_NEXT_STEP_SQL: &str =
    "SELECT id, description, done FROM steps WHERE done = 0 ORDER BY id LIMIT 1";
const SELECT_ALL_STEPS_SQL: &str = "SELECT id, description, done FROM steps ORDER BY id";
const UPDATE_STEP_DONE_SQL: &str = "UPDATE steps SET done = ?1 WHERE id = ?2";
const DELETE_STEP_SQL: &str = "DELETE FROM steps WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Step from a database row
    fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<Step> {
        Ok(Step {
            id: row.get::<_, i64>(0)? as u64,
            description: row.get(1)?,
            done: row.get(2)?,
        })
    }

    /// Sets the done flag, failing if no row was touched.
    fn set_done(&self, id: u64, done: bool, context: &str) -> Result<()> {
        let changed = self
            .connection
            .execute(UPDATE_STEP_DONE_SQL, params![done, id as i64])
            .db_context(context)?;

        if changed == 0 {
            return Err(SmeltError::StepNotFound { id });
        }
        Ok(())
    }
}

impl RoadmapStore for super::Database {
    fn add_step(&mut self, description: &str) -> Result<u64> {
        validate_description(description)?;

        self.connection
            .execute(INSERT_STEP_SQL, params![description])
            .db_context("Failed to add step")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    fn next_step(&self) -> Result<Option<Step>> {
        self.connection
            .query_row(SELECT_NEXT_STEP_SQL, [], Self::build_step_from_row)
            .optional()
            .db_context("Failed to fetch next step")
    }

    fn mark_done(&mut self, id: u64) -> Result<()> {
        self.set_done(id, true, "Failed to mark step as done")
    }

    fn reset_step(&mut self, id: u64) -> Result<()> {
        self.set_done(id, false, "Failed to reset step")
    }

    fn remove_step(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_STEP_SQL, params![id as i64])
            .db_context("Failed to remove step")?;

        if deleted == 0 {
            return Err(SmeltError::StepNotFound { id });
        }
        Ok(())
    }

    fn all_steps(&self) -> Result<Vec<Step>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_STEPS_SQL)
            .db_context("Failed to prepare statement")?;

        let steps = stmt
            .query_map([], Self::build_step_from_row)
            .db_context("Failed to fetch all steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch all steps")?;

        Ok(steps)
    }

    fn import_steps(&mut self, steps: &[ParsedStep]) -> Result<Vec<u64>> {
        for step in steps {
            validate_description(&step.description)?;
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut ids = Vec::with_capacity(steps.len());
        for step in steps {
            tx.execute(IMPORT_STEP_SQL, params![step.description, step.done])
                .db_context("Failed to import step")?;
            ids.push(tx.last_insert_rowid() as u64);
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(ids)
    }

    fn close(self: Box<Self>) -> Result<()> {
        super::Database::close(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Database;
    use super::*;

    #[test]
    fn test_next_step_skips_done_rows() {
        let mut db = Database::in_memory().unwrap();
        let first = db.add_step("First").unwrap();
        let second = db.add_step("Second").unwrap();
        db.mark_done(first).unwrap();

        assert_eq!(db.next_step().unwrap().map(|s| s.id), Some(second));
    }

    #[test]
    fn test_mark_done_is_a_set_operation() {
        let mut db = Database::in_memory().unwrap();
        let id = db.add_step("Only step").unwrap();

        db.mark_done(id).unwrap();
        db.mark_done(id).unwrap();

        assert!(db.all_steps().unwrap()[0].done);
    }

    #[test]
    fn test_import_is_transactional() {
        let mut db = Database::in_memory().unwrap();
        let ids = db
            .import_steps(&[
                ParsedStep::new("Create the users table", true),
                ParsedStep::new("Add password hashing", false),
            ])
            .unwrap();

        let steps = db.all_steps().unwrap();
        assert_eq!(steps.iter().map(|s| s.id).collect::<Vec<_>>(), ids);
        assert!(steps[0].done);
        assert!(!steps[1].done);
    }
}
