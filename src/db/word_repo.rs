use rusqlite::{Connection, params};
use std::sync::Mutex;
use tracing::{debug, warn};

use super::{OpenIntent, WordListDb};
use crate::{
    contract::Contract,
    domain::{WordEntry, WordId},
    error::{Error, Result},
};

/// Returned by [`WordStore::insert`] when the row could not be written.
pub const INSERT_FAILED: WordId = 0;
/// Returned by [`WordStore::update`] when the statement could not run.
pub const UPDATE_FAILED: i64 = -1;

/// CRUD, search and count over the word table.
///
/// One read and one write connection are opened on first use and kept for the life of
/// the store. Each `try_*` method reports failures as [`Error`]; the plain methods log
/// the failure and return a sentinel instead.
pub struct WordStore {
    db: WordListDb,
    contract: Contract,
    readable: Mutex<Option<Connection>>,
    writable: Mutex<Option<Connection>>,
}

impl WordStore {
    pub fn new(db: WordListDb, contract: Contract) -> Self {
        Self {
            db,
            contract,
            readable: Mutex::new(None),
            writable: Mutex::new(None),
        }
    }

    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    pub fn db(&self) -> &WordListDb {
        &self.db
    }

    /// Entries at `position`.
    ///
    /// The "all items" position yields every entry sorted by word. Any other position
    /// `n` is looked up as `id = n + 1`, so it only means "the n-th entry" while ids are
    /// still dense from 1.
    pub fn try_query(&self, position: i64) -> Result<Vec<WordEntry>> {
        if position == self.contract.all_items {
            return self.with_conn(OpenIntent::Read, |conn| {
                let mut stmt =
                    conn.prepare_cached("SELECT id, word FROM word_entries ORDER BY word ASC")?;
                let rows = stmt.query_map([], row_to_entry)?;
                Ok(rows.collect::<rusqlite::Result<_>>()?)
            });
        }

        let Some(id) = position.checked_add(1) else {
            return Ok(Vec::new());
        };
        self.with_conn(OpenIntent::Read, |conn| {
            let mut stmt = conn.prepare_cached("SELECT id, word FROM word_entries WHERE id = ?1")?;
            let rows = stmt.query_map(params![id], row_to_entry)?;
            Ok(rows.collect::<rusqlite::Result<_>>()?)
        })
    }

    /// Words containing `substring`, matched with SQL `LIKE` (ASCII case-insensitive,
    /// `%` and `_` act as wildcards). Storage order.
    pub fn try_search(&self, substring: &str) -> Result<Vec<String>> {
        let pattern = format!("%{substring}%");
        self.with_conn(OpenIntent::Read, |conn| {
            let mut stmt = conn.prepare_cached("SELECT word FROM word_entries WHERE word LIKE ?1")?;
            let rows = stmt.query_map(params![pattern], |row| row.get::<_, String>(0))?;
            Ok(rows.collect::<rusqlite::Result<_>>()?)
        })
    }

    pub fn try_insert(&self, word: &str) -> Result<WordId> {
        self.with_conn(OpenIntent::Write, |conn| {
            conn.prepare_cached("INSERT INTO word_entries (word) VALUES (?1)")?
                .execute(params![word])?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Rows changed: 1 if `id` exists, otherwise 0.
    pub fn try_update(&self, id: WordId, word: &str) -> Result<usize> {
        self.with_conn(OpenIntent::Write, |conn| {
            Ok(conn
                .prepare_cached("UPDATE word_entries SET word = ?1 WHERE id = ?2")?
                .execute(params![word, id])?)
        })
    }

    pub fn try_delete(&self, id: WordId) -> Result<usize> {
        self.with_conn(OpenIntent::Write, |conn| {
            Ok(conn
                .prepare_cached("DELETE FROM word_entries WHERE id = ?1")?
                .execute(params![id])?)
        })
    }

    pub fn try_count(&self) -> Result<i64> {
        self.with_conn(OpenIntent::Read, |conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM word_entries", [], |row| row.get(0))?)
        })
    }

    /// [`WordStore::try_query`], with failures logged and reported as `None`.
    pub fn query(&self, position: i64) -> Option<Vec<WordEntry>> {
        self.try_query(position)
            .inspect_err(|e| warn!(position, "query failed: {e}"))
            .ok()
    }

    pub fn search(&self, substring: &str) -> Option<Vec<String>> {
        self.try_search(substring)
            .inspect_err(|e| warn!("search failed: {e}"))
            .ok()
    }

    /// New id, or [`INSERT_FAILED`].
    pub fn insert(&self, word: &str) -> WordId {
        self.try_insert(word).unwrap_or_else(|e| {
            warn!("insert failed: {e}");
            INSERT_FAILED
        })
    }

    /// Rows changed, or [`UPDATE_FAILED`].
    pub fn update(&self, id: WordId, word: &str) -> i64 {
        match self.try_update(id, word) {
            Ok(rows) => rows as i64,
            Err(e) => {
                warn!(id, "update failed: {e}");
                UPDATE_FAILED
            }
        }
    }

    /// Rows deleted; a failure counts as none.
    pub fn delete(&self, id: WordId) -> i64 {
        match self.try_delete(id) {
            Ok(rows) => rows as i64,
            Err(e) => {
                warn!(id, "delete failed: {e}");
                0
            }
        }
    }

    pub fn count(&self) -> Option<i64> {
        self.try_count()
            .inspect_err(|e| warn!("count failed: {e}"))
            .ok()
    }

    fn with_conn<T>(
        &self,
        intent: OpenIntent,
        f: impl FnOnce(&Connection) -> Result<T>,
    ) -> Result<T> {
        let (slot, label) = match intent {
            OpenIntent::Read => (&self.readable, "read"),
            OpenIntent::Write => (&self.writable, "write"),
        };
        let mut guard = slot.lock().map_err(|_| Error::LockPoisoned(label))?;
        let conn = match guard.take() {
            Some(conn) => conn,
            None => {
                debug!("acquiring {label} connection");
                self.db.open(intent)?
            }
        };
        f(guard.insert(conn))
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<WordEntry> {
    Ok(WordEntry {
        id: row.get(0)?,
        word: row.get(1)?,
    })
}
