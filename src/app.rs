use wordlist::{Config, WordListDb, WordResolver, WordStore};

pub(crate) struct AppContext {
    store: WordStore,
}

impl AppContext {
    pub(crate) fn new(config: Config) -> Self {
        let db = WordListDb::new(config.db_path);
        Self {
            store: WordStore::new(db, config.contract),
        }
    }

    pub(crate) fn store(&self) -> &WordStore {
        &self.store
    }

    pub(crate) fn resolver(&self) -> WordResolver<'_> {
        WordResolver::new(&self.store)
    }
}
