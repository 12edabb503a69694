//! Database schema initialization and validation.

use std::collections::HashSet;

use log::debug;

use crate::error::{DatabaseResultExt, Result, SmeltError};

/// Columns every roadmap `steps` table must carry.
const REQUIRED_COLUMNS: [&str; 3] = ["id", "description", "done"];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to create steps table")?;

        self.verify_schema()
    }

    /// Checks that a pre-existing `steps` table has the columns we query.
    fn verify_schema(&self) -> Result<()> {
        let mut stmt = self
            .connection
            .prepare("SELECT name FROM pragma_table_info('steps')")
            .db_context("Failed to inspect steps table")?;

        let columns = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .db_context("Failed to inspect steps table")?
            .collect::<rusqlite::Result<HashSet<String>>>()
            .db_context("Failed to read steps table columns")?;

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !columns.contains(*column))
            .collect();

        if !missing.is_empty() {
            return Err(SmeltError::Schema {
                message: format!("steps table is missing column(s): {}", missing.join(", ")),
            });
        }

        debug!("Roadmap schema verified");
        Ok(())
    }
}
