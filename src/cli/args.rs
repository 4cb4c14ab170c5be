use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "words")]
#[command(about = "A persistent word list", version)]
pub(crate) struct Cli {
    /// Word to add; without one (and without a subcommand) the browser opens
    pub(crate) word: Option<String>,

    /// Database file [default: $WORDLIST_DB, then ~/.wordlist/wordlist.db]
    #[arg(long, global = true)]
    pub(crate) db: Option<PathBuf>,

    /// Print tables as JSON
    #[arg(long, global = true)]
    pub(crate) json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

impl Cli {
    pub(crate) fn is_interactive(&self) -> bool {
        self.command.is_none() && self.word.is_none()
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Add a word
    Add { word: String },
    /// List every word, sorted
    #[command(alias = "ls")]
    List,
    /// Show the entry at a position (id = position + 1; -2 lists everything)
    Get {
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },
    /// Find words containing TEXT
    Search { text: String },
    /// Count entries
    Count,
    /// Replace the word stored under ID
    Update { id: i64, word: String },
    /// Delete the entry with ID
    #[command(alias = "rm")]
    Delete { id: i64 },
    /// Read a content URI or logical path, e.g. words/count
    Query { uri: String },
    Version,
}
