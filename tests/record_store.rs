//! Behaviour of the word store against a real database file.

use std::path::PathBuf;

use rstest::{fixture, rstest};
use tempfile::TempDir;
use wordlist::{ALL_ITEMS, Contract, SCHEMA_VERSION, SEED_WORDS, WordListDb, WordStore};

struct Seeded {
    dir: TempDir,
    store: WordStore,
}

impl Seeded {
    fn path(&self) -> PathBuf {
        self.dir.path().join("wordlist.db")
    }
}

#[fixture]
fn seeded() -> Seeded {
    let dir = tempfile::tempdir().unwrap();
    let store = WordStore::new(
        WordListDb::new(dir.path().join("wordlist.db")),
        Contract::default(),
    );
    Seeded { dir, store }
}

fn seed_len() -> i64 {
    SEED_WORDS.len() as i64
}

#[rstest]
fn fresh_database_holds_the_seed_words(seeded: Seeded) {
    assert_eq!(seeded.store.count(), Some(seed_len()));
    for (position, word) in SEED_WORDS.iter().enumerate() {
        let rows = seeded.store.query(position as i64).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, position as i64 + 1);
        assert_eq!(rows[0].word, *word);
    }
}

#[rstest]
fn all_items_are_sorted_by_word(seeded: Seeded) {
    let entries = seeded.store.query(ALL_ITEMS).unwrap();
    assert_eq!(entries.len(), SEED_WORDS.len());

    let words: Vec<&str> = entries.iter().map(|entry| entry.word.as_str()).collect();
    let mut sorted = words.clone();
    sorted.sort_unstable();
    assert_eq!(words, sorted);
    assert_eq!(entries[0].word, "Adapter");
    assert_eq!(entries[1].word, "Android");
}

#[rstest]
#[case::past_the_end(11)]
#[case::negative(-1)]
fn positions_without_an_id_are_empty(seeded: Seeded, #[case] position: i64) {
    assert_eq!(seeded.store.query(position), Some(Vec::new()));
}

#[rstest]
fn insert_appends_with_a_fresh_id(seeded: Seeded) {
    let before = seeded.store.count().unwrap();
    let id = seeded.store.insert("Foo");

    assert!(id > seed_len());
    assert_eq!(seeded.store.count(), Some(before + 1));
    assert_eq!(seeded.store.query(id - 1).unwrap()[0].word, "Foo");

    let second = seeded.store.insert("Foo");
    assert!(second > id);
}

#[rstest]
fn deleting_the_highest_id_lets_it_be_assigned_again(seeded: Seeded) {
    let last = seed_len();
    assert_eq!(seeded.store.delete(last), 1);

    let id = seeded.store.insert("Foo");
    assert_eq!(id, last);
    assert_eq!(seeded.store.query(last - 1).unwrap()[0].word, "Foo");

    // Still above every id present.
    assert!(seeded.store.insert("Bar") > id);
}

#[rstest]
fn update_reports_rows_changed(seeded: Seeded) {
    assert_eq!(seeded.store.update(3, "Bar"), 1);
    assert_eq!(seeded.store.query(2).unwrap()[0].word, "Bar");
    assert_eq!(seeded.store.search("Bar"), Some(vec!["Bar".to_string()]));

    assert_eq!(seeded.store.update(999, "Bar"), 0);
}

#[rstest]
fn delete_removes_once(seeded: Seeded) {
    assert_eq!(seeded.store.delete(4), 1);
    assert_eq!(seeded.store.count(), Some(seed_len() - 1));
    assert_eq!(seeded.store.delete(4), 0);
    assert_eq!(seeded.store.count(), Some(seed_len() - 1));
}

#[rstest]
fn positions_follow_ids_not_order_after_delete(seeded: Seeded) {
    seeded.store.delete(1);
    assert_eq!(seeded.store.query(0), Some(Vec::new()));
    assert_eq!(seeded.store.query(1).unwrap()[0].word, "Adapter");
}

#[rstest]
#[case("droid")]
#[case("DROID")]
fn search_matches_substrings_ignoring_case(seeded: Seeded, #[case] needle: &str) {
    let words = seeded.store.search(needle).unwrap();
    assert!(words.contains(&"Android".to_string()));
    assert!(!words.contains(&"ListView".to_string()));
    assert_eq!(words.len(), 3);
}

#[rstest]
fn search_without_match_is_empty(seeded: Seeded) {
    assert_eq!(seeded.store.search("zebra"), Some(Vec::new()));
}

#[rstest]
fn count_is_stable_without_writes(seeded: Seeded) {
    assert_eq!(seeded.store.count(), seeded.store.count());
}

#[rstest]
fn entries_survive_reopening(seeded: Seeded) {
    let id = seeded.store.insert("Loader");
    let reopened = WordStore::new(WordListDb::new(seeded.path()), Contract::default());

    assert_eq!(reopened.count(), Some(seed_len() + 1));
    assert_eq!(reopened.query(id - 1).unwrap()[0].word, "Loader");
}

#[rstest]
fn newer_version_recreates_the_table(seeded: Seeded) {
    seeded.store.insert("Foo");
    seeded.store.delete(1);
    assert_eq!(seeded.store.db().stored_version().unwrap(), SCHEMA_VERSION);

    let upgraded = WordStore::new(
        WordListDb::new(seeded.path()).with_version(SCHEMA_VERSION + 1),
        Contract::default(),
    );
    assert_eq!(upgraded.count(), Some(seed_len()));
    assert_eq!(upgraded.query(0).unwrap()[0].word, "Android");
    assert!(upgraded.search("Foo").unwrap().is_empty());
    assert_eq!(upgraded.db().stored_version().unwrap(), SCHEMA_VERSION + 1);
}

#[rstest]
fn concurrent_writers_share_one_connection(seeded: Seeded) {
    std::thread::scope(|scope| {
        for worker in 0..4 {
            let store = &seeded.store;
            scope.spawn(move || {
                for n in 0..5 {
                    assert!(store.insert(&format!("word-{worker}-{n}")) > 0);
                }
            });
        }
    });
    assert_eq!(seeded.store.count(), Some(seed_len() + 20));
}

#[rstest]
fn typed_operations_match_sentinels(seeded: Seeded) {
    assert_eq!(seeded.store.try_count().unwrap(), seed_len());
    assert_eq!(seeded.store.try_update(999, "x").unwrap(), 0);
    assert_eq!(seeded.store.try_delete(999).unwrap(), 0);
    assert!(seeded.store.try_query(ALL_ITEMS).unwrap().len() == SEED_WORDS.len());
}
