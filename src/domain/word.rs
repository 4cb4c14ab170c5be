use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Engine-assigned row id. Stable for the entry's lifetime, never reused as a position.
pub type WordId = i64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    pub word: String,
}

/// Key-value payload for insert and update. `word` is the only recognized key;
/// anything else in the payload is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WordValues {
    #[serde(default)]
    pub word: Option<String>,
}

impl WordValues {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
        }
    }

    pub fn word(&self) -> Result<&str> {
        self.word.as_deref().ok_or(Error::MissingWord)
    }
}
