mod word;

pub use word::{WordEntry, WordId, WordValues};
