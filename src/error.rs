//! Error types for word list operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for word list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing the word list.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open the database file
    #[error("Failed to open database at '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Expected schema versions start at 1; 0 marks a file that was never created
    #[error("Invalid schema version {0}: must be positive")]
    InvalidVersion(i32),

    /// A connection mutex was poisoned by a panicking caller
    #[error("{0} connection lock poisoned")]
    LockPoisoned(&'static str),

    /// Insert/update payload did not carry a `word` value
    #[error("values carry no `word` key")]
    MissingWord,

    /// URI or path outside the addressing scheme
    #[error("Unknown URI: {0}")]
    UnknownUri(String),

    /// Operation not defined for the addressed route
    #[error("{operation} is not supported on {uri}")]
    UnsupportedOperation { operation: &'static str, uri: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
