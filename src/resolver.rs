//! Routes logical paths and content URIs onto a [`WordStore`].
//!
//! Three routes exist under the contract's content path:
//!
//! - `words`: every entry, or a search when a selection argument is given
//! - `words/<n>`: one entry, by position for reads and by id for update/delete
//! - `words/count`: the number of entries
//!
//! Store failures keep their sentinel shape (`None`, `0`, `-1`); only requests that do
//! not fit the routes are reported as errors.

use serde::Serialize;
use tracing::debug;

use crate::{
    contract::Contract,
    db::WordStore,
    domain::{WordEntry, WordId, WordValues},
    error::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AllItems,
    Single(i64),
    Count,
}

impl Route {
    /// Parses a full `content://` URI or a bare logical path.
    pub fn parse(uri: &str, contract: &Contract) -> Result<Self> {
        let unknown = || Error::UnknownUri(uri.to_string());
        let path = contract.logical_path(uri).ok_or_else(unknown)?;
        let path = path.strip_suffix('/').unwrap_or(path);
        let mut segments = path.split('/');
        if segments.next() != Some(contract.content_path.as_str()) {
            return Err(unknown());
        }

        let route = match segments.next() {
            None => Route::AllItems,
            Some(segment) if segment == contract.count_segment => Route::Count,
            Some(segment) if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) => {
                Route::Single(segment.parse().map_err(|_| unknown())?)
            }
            Some(_) => return Err(unknown()),
        };
        if segments.next().is_some() {
            return Err(unknown());
        }
        Ok(route)
    }

    fn describe(self, contract: &Contract) -> String {
        match self {
            Route::AllItems => contract.content_uri(),
            Route::Single(n) => contract.entry_uri(n),
            Route::Count => contract.row_count_uri(),
        }
    }
}

/// A single value in a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Text(String),
}

/// Tabular read result: named columns, then rows in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        Self {
            columns: vec!["id", "word"],
            rows: entries
                .into_iter()
                .map(|entry| vec![Cell::Integer(entry.id), Cell::Text(entry.word)])
                .collect(),
        }
    }

    pub fn from_words(words: Vec<String>) -> Self {
        Self {
            columns: vec!["word"],
            rows: words.into_iter().map(|word| vec![Cell::Text(word)]).collect(),
        }
    }

    pub fn from_count(count: i64) -> Self {
        Self {
            columns: vec!["count"],
            rows: vec![vec![Cell::Integer(count)]],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct WordResolver<'a> {
    store: &'a WordStore,
}

impl<'a> WordResolver<'a> {
    pub fn new(store: &'a WordStore) -> Self {
        Self { store }
    }

    pub fn contract(&self) -> &Contract {
        self.store.contract()
    }

    pub fn mime_type(&self, route: Route) -> &str {
        match route {
            Route::AllItems => &self.contract().multiple_records_mime_type,
            Route::Single(_) | Route::Count => &self.contract().single_record_mime_type,
        }
    }

    /// Reads a route. On [`Route::AllItems`], a selection argument turns the listing into
    /// a search.
    pub fn query(&self, route: Route, selection: Option<&str>) -> Option<Table> {
        debug!(?route, ?selection, "query");
        match (route, selection) {
            (Route::AllItems, Some(substring)) => {
                self.store.search(substring).map(Table::from_words)
            }
            (Route::AllItems, None) => self
                .store
                .query(self.contract().all_items)
                .map(Table::from_entries),
            (Route::Single(position), _) => self.store.query(position).map(Table::from_entries),
            (Route::Count, _) => self.store.count().map(Table::from_count),
        }
    }

    /// Inserts the payload's word; the id may be the store's failure sentinel.
    pub fn insert(&self, route: Route, values: &WordValues) -> Result<WordId> {
        if route != Route::AllItems {
            return Err(self.unsupported("insert", route));
        }
        Ok(self.store.insert(values.word()?))
    }

    pub fn update(&self, route: Route, values: &WordValues) -> Result<i64> {
        let Route::Single(id) = route else {
            return Err(self.unsupported("update", route));
        };
        Ok(self.store.update(id, values.word()?))
    }

    pub fn delete(&self, route: Route) -> Result<i64> {
        let Route::Single(id) = route else {
            return Err(self.unsupported("delete", route));
        };
        Ok(self.store.delete(id))
    }

    fn unsupported(&self, operation: &'static str, route: Route) -> Error {
        Error::UnsupportedOperation {
            operation,
            uri: route.describe(self.contract()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_routes() {
        let contract = Contract::default();
        assert_eq!(
            Route::parse(&contract.content_uri(), &contract).unwrap(),
            Route::AllItems
        );
        assert_eq!(
            Route::parse(&contract.row_count_uri(), &contract).unwrap(),
            Route::Count
        );
        assert_eq!(
            Route::parse(&contract.entry_uri(7), &contract).unwrap(),
            Route::Single(7)
        );
        assert_eq!(Route::parse("words/", &contract).unwrap(), Route::AllItems);
        assert_eq!(Route::parse("words/0", &contract).unwrap(), Route::Single(0));
    }

    #[test]
    fn rejects_paths_outside_the_scheme() {
        let contract = Contract::default();
        for uri in [
            "",
            "notes",
            "words/-2",
            "words/abc",
            "words/1/extra",
            "words//",
            "content://elsewhere/words",
        ] {
            assert!(
                matches!(Route::parse(uri, &contract), Err(Error::UnknownUri(_))),
                "{uri} should be rejected"
            );
        }
    }

    #[test]
    fn count_table_has_one_cell() {
        let table = Table::from_count(11);
        assert_eq!(table.columns, vec!["count"]);
        assert_eq!(table.rows, vec![vec![Cell::Integer(11)]]);
    }
}
