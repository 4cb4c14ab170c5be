//! Storage for the word list: schema lifecycle and the record store on top of it.

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

mod schema;
mod word_repo;

pub use schema::{SCHEMA_VERSION, SEED_WORDS, WORD_LIST_TABLE, create, upgrade};
pub use word_repo::{INSERT_FAILED, UPDATE_FAILED, WordStore};

/// What a connection will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenIntent {
    /// Queries only; the connection refuses writes.
    Read,
    /// Inserts, updates and deletes.
    Write,
}

/// Owns the database file and the schema version it is expected to carry.
///
/// Every connection handed out has already been brought to [`WordListDb::version`]:
/// a fresh file is created and seeded, a file stamped with any other version has its
/// table dropped and recreated.
#[derive(Debug, Clone)]
pub struct WordListDb {
    path: PathBuf,
    version: i32,
}

impl WordListDb {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!("constructing word list database at {}", path.display());
        Self {
            path,
            version: SCHEMA_VERSION,
        }
    }

    /// Overrides the expected schema version. Opening fails with
    /// [`Error::InvalidVersion`] unless it is positive; 0 marks a fresh file.
    pub fn with_version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Opens a new connection, creating or upgrading the schema first.
    pub fn open(&self, intent: OpenIntent) -> Result<Connection> {
        let mut conn = Connection::open(&self.path).map_err(|source| Error::Open {
            path: self.path.clone(),
            source,
        })?;
        schema::ensure(&mut conn, self.version)?;
        if intent == OpenIntent::Read {
            conn.pragma_update(None, "query_only", true)?;
        }

        debug!("opened {} ({:?})", self.path.display(), intent);
        Ok(conn)
    }

    /// Schema version currently stamped on the file, 0 if it was never created.
    ///
    /// Opens read-only; a missing file is reported as 0 and left missing.
    pub fn stored_version(&self) -> Result<i32> {
        if !self.path.exists() {
            return Ok(0);
        }
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| Error::Open {
                path: self.path.clone(),
                source,
            })?;
        schema::stored_version(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_version_fails_to_open_and_leaves_no_table() {
        let dir = tempfile::tempdir().unwrap();
        let db = WordListDb::new(dir.path().join("words.db")).with_version(0);
        assert!(matches!(
            db.open(OpenIntent::Write),
            Err(Error::InvalidVersion(0))
        ));
        assert_eq!(db.stored_version().unwrap(), 0);
    }

    #[test]
    fn read_connections_refuse_writes() {
        let dir = tempfile::tempdir().unwrap();
        let db = WordListDb::new(dir.path().join("words.db"));

        let conn = db.open(OpenIntent::Read).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM word_entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, SEED_WORDS.len() as i64);
        assert!(
            conn.execute("INSERT INTO word_entries (word) VALUES ('x')", [])
                .is_err()
        );
    }

    #[test]
    fn open_stamps_expected_version() {
        let dir = tempfile::tempdir().unwrap();
        let db = WordListDb::new(dir.path().join("words.db"));
        assert_eq!(db.stored_version().unwrap(), 0);
        assert!(!db.path().exists());

        db.open(OpenIntent::Write).unwrap();
        assert_eq!(db.stored_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn missing_directory_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = WordListDb::new(dir.path().join("absent").join("words.db"));
        assert!(matches!(db.open(OpenIntent::Read), Err(Error::Open { .. })));
    }
}
