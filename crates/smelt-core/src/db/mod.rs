//! SQLite roadmap backend.
//!
//! This module provides the persistent [`RoadmapStore`](crate::roadmap::RoadmapStore)
//! implementation. It owns the SQLite connection, creates the schema on first
//! use and checks it on every open.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result, SmeltError};

pub mod migrations;
pub mod step_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the roadmap database at `path` and initializes the
    /// schema. Missing parent directories are created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SmeltError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening roadmap database at {}", path.display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mostly useful in tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Closes the connection, reporting any error SQLite raises on release.
    pub fn close(self) -> Result<()> {
        debug!("Closing roadmap database");
        self.connection
            .close()
            .map_err(|(_, e)| SmeltError::database("Failed to close database").with_source(e))
    }
}
