use rusqlite::{Connection, TransactionBehavior, params};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Version the code expects to find in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

pub const WORD_LIST_TABLE: &str = "word_entries";

/// Inserted once, in this order, when the table is first created.
pub const SEED_WORDS: [&str; 11] = [
    "Android",
    "Adapter",
    "ListView",
    "AsyncTask",
    "Android Studio",
    "SQLiteDatabase",
    "SQLOpenHelper",
    "Data model",
    "ViewHolder",
    "Android Performance",
    "OnClickListener",
];

/// Brings the database to `expected`: creates and seeds a fresh database, or drops and
/// recreates the table when the stored version differs.
pub(super) fn ensure(conn: &mut Connection, expected: i32) -> Result<()> {
    if expected <= 0 {
        return Err(Error::InvalidVersion(expected));
    }
    if stored_version(conn)? == expected {
        return Ok(());
    }

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    // Another connection may have finished the job while we waited for the lock.
    let stored = stored_version(&tx)?;
    if stored == expected {
        return Ok(());
    }
    if stored != 0 {
        upgrade(&tx, stored, expected)?;
    }
    create(&tx)?;
    set_version(&tx, expected)?;
    tx.commit()?;
    Ok(())
}

/// Creates the word table and fills it with [`SEED_WORDS`].
pub fn create(conn: &Connection) -> Result<()> {
    debug!("creating {WORD_LIST_TABLE}");
    conn.execute_batch(
        "CREATE TABLE word_entries (
            id INTEGER PRIMARY KEY,
            word TEXT
        );",
    )?;
    seed(conn)
}

/// Drops the word table. Every stored entry is lost; the caller recreates it.
pub fn upgrade(conn: &Connection, old_version: i32, new_version: i32) -> Result<()> {
    warn!(
        old_version,
        new_version, "upgrading database schema, which will destroy all old data"
    );
    conn.execute_batch("DROP TABLE IF EXISTS word_entries;")?;
    Ok(())
}

fn seed(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("INSERT INTO word_entries (word) VALUES (?1)")?;
    for word in SEED_WORDS {
        stmt.execute(params![word])?;
    }
    Ok(())
}

pub(super) fn stored_version(conn: &Connection) -> Result<i32> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

fn set_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(conn: &Connection) -> Vec<(i64, String)> {
        let mut stmt = conn
            .prepare("SELECT id, word FROM word_entries ORDER BY id")
            .unwrap();
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap()
    }

    #[test]
    fn fresh_database_is_seeded_in_order() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure(&mut conn, SCHEMA_VERSION).unwrap();

        let rows = words(&conn);
        assert_eq!(rows.len(), SEED_WORDS.len());
        for (index, (id, word)) in rows.iter().enumerate() {
            assert_eq!(*id, index as i64 + 1);
            assert_eq!(word, SEED_WORDS[index]);
        }
        assert_eq!(stored_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn ensure_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure(&mut conn, SCHEMA_VERSION).unwrap();
        conn.execute("DELETE FROM word_entries WHERE id = 1", [])
            .unwrap();
        ensure(&mut conn, SCHEMA_VERSION).unwrap();

        assert_eq!(words(&conn).len(), SEED_WORDS.len() - 1);
    }

    #[test]
    fn version_change_recreates_table() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure(&mut conn, 1).unwrap();
        conn.execute("INSERT INTO word_entries (word) VALUES ('Extra')", [])
            .unwrap();

        ensure(&mut conn, 2).unwrap();

        assert_eq!(words(&conn).len(), SEED_WORDS.len());
        assert_eq!(stored_version(&conn).unwrap(), 2);
    }

    #[test]
    fn non_positive_versions_are_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        for version in [0, -1] {
            assert!(matches!(
                ensure(&mut conn, version),
                Err(Error::InvalidVersion(v)) if v == version
            ));
        }
        assert_eq!(stored_version(&conn).unwrap(), 0);

        ensure(&mut conn, SCHEMA_VERSION).unwrap();
        assert_eq!(words(&conn).len(), SEED_WORDS.len());
    }

    #[test]
    fn upgrade_drops_the_table() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure(&mut conn, SCHEMA_VERSION).unwrap();
        upgrade(&conn, SCHEMA_VERSION, SCHEMA_VERSION + 1).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'word_entries'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 0);
    }
}
