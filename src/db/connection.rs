use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PipelineError;

pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Handle on a SQLite snapshot file. Connections are opened per call.
#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Opens (creating if needed) a read-write connection and runs `f(conn)`.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, PipelineError>
    where
        F: FnOnce(&mut Connection) -> Result<T, PipelineError>,
    {
        let mut conn = Connection::open(&self.path)
            .map_err(|e| PipelineError::DbError(format!("Open DB failed: {e}")))?;
        f(&mut conn)
    }

    /// Opens an existing file read-only. An absent file means the roster
    /// loader has not run yet.
    pub fn with_read_only<F, T>(&self, f: F) -> Result<T, PipelineError>
    where
        F: FnOnce(&Connection) -> Result<T, PipelineError>,
    {
        if !self.exists() {
            return Err(PipelineError::JoinInputMissing(
                self.path.display().to_string(),
            ));
        }

        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| PipelineError::DbError(format!("Open DB failed: {e}")))?;
        f(&conn)
    }

    /// Deletes any previous file so the next connection starts empty.
    pub fn reset(&self) -> Result<(), PipelineError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                PipelineError::DbError(format!(
                    "Failed to remove old snapshot {}: {e}",
                    self.path.display()
                ))
            })?;
        }
        Ok(())
    }
}

/// Apply the snapshot schema.
pub fn init_db(db: &Database) -> Result<(), PipelineError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| PipelineError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })
}
