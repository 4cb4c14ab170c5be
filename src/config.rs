use std::{env, fs, path::PathBuf};

use crate::{contract::Contract, error::Result};

pub const DATABASE_NAME: &str = "wordlist";
const DB_PATH_ENV: &str = "WORDLIST_DB";

/// Where the word list lives and how callers address it.
#[derive(Clone, Debug)]
pub struct Config {
    pub db_path: PathBuf,
    pub contract: Contract,
}

impl Config {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            contract: Contract::default(),
        }
    }

    /// Resolves the database path: explicit override, then `WORDLIST_DB`, then the
    /// per-user default.
    pub fn load(db_override: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_override.or_else(|| env::var_os(DB_PATH_ENV).map(PathBuf::from)) {
            Some(path) => path,
            None => default_db_path()?,
        };
        Ok(Self::new(db_path))
    }
}

pub fn default_db_path() -> Result<PathBuf> {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let dir = PathBuf::from(home).join(".wordlist");
    fs::create_dir_all(&dir)?;
    Ok(dir.join(format!("{DATABASE_NAME}.db")))
}
