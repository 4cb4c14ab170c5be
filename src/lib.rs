//! A persistent word list on SQLite.
//!
//! [`db::WordListDb`] owns the database file: it creates and seeds the single
//! `word_entries` table on first use and drops and recreates it whenever the stored
//! schema version differs from the expected one. [`db::WordStore`] sits on top with
//! positional query, search, insert, update, delete and count, each lazily opening a
//! cached read or write connection. [`resolver::WordResolver`] maps content URIs such as
//! `content://com.example.wordlist.provider/words/count` onto the store.
//!
//! # Example
//!
//! ```no_run
//! use wordlist::{Contract, WordListDb, WordStore};
//!
//! let store = WordStore::new(WordListDb::new("wordlist.db"), Contract::default());
//! let id = store.insert("Cursor");
//! assert!(id > 0);
//! for entry in store.query(wordlist::ALL_ITEMS).unwrap_or_default() {
//!     println!("{} {}", entry.id, entry.word);
//! }
//! ```

pub mod config;
pub mod contract;
pub mod db;
pub mod domain;
mod error;
pub mod resolver;

pub use config::Config;
pub use contract::{ALL_ITEMS, Contract};
pub use db::{
    INSERT_FAILED, OpenIntent, SCHEMA_VERSION, SEED_WORDS, UPDATE_FAILED, WordListDb, WordStore,
};
pub use domain::{WordEntry, WordId, WordValues};
pub use error::{Error, Result};
pub use resolver::{Cell, Route, Table, WordResolver};
