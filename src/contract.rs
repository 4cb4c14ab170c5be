//! Addressing constants shared by the word store and the callers that route to it.

/// Position value meaning "every entry" rather than a single row.
pub const ALL_ITEMS: i64 = -2;
pub const AUTHORITY: &str = "com.example.wordlist.provider";
pub const CONTENT_PATH: &str = "words";
pub const COUNT: &str = "count";
pub const SINGLE_RECORD_MIME_TYPE: &str = "vnd.android.cursor.item/vnd.com.example.provider.words";
pub const MULTIPLE_RECORDS_MIME_TYPE: &str =
    "vnd.android.cursor.dir/vnd.com.example.provider.words";

const SCHEME: &str = "content://";

/// Addressing scheme handed to the store and resolver at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    pub authority: String,
    pub content_path: String,
    pub count_segment: String,
    pub all_items: i64,
    pub single_record_mime_type: String,
    pub multiple_records_mime_type: String,
}

impl Default for Contract {
    fn default() -> Self {
        Self {
            authority: AUTHORITY.to_string(),
            content_path: CONTENT_PATH.to_string(),
            count_segment: COUNT.to_string(),
            all_items: ALL_ITEMS,
            single_record_mime_type: SINGLE_RECORD_MIME_TYPE.to_string(),
            multiple_records_mime_type: MULTIPLE_RECORDS_MIME_TYPE.to_string(),
        }
    }
}

impl Contract {
    /// `content://<authority>/<path>`, addressing every entry.
    pub fn content_uri(&self) -> String {
        format!("{}{}/{}", SCHEME, self.authority, self.content_path)
    }

    pub fn row_count_uri(&self) -> String {
        format!("{}/{}", self.content_uri(), self.count_segment)
    }

    pub fn entry_uri(&self, n: i64) -> String {
        format!("{}/{}", self.content_uri(), n)
    }

    /// Strips scheme and authority, leaving the logical path.
    ///
    /// Bare paths are returned unchanged; URIs naming another authority yield `None`.
    pub(crate) fn logical_path<'a>(&self, uri: &'a str) -> Option<&'a str> {
        let Some(rest) = uri.strip_prefix(SCHEME) else {
            return Some(uri.trim_start_matches('/'));
        };
        let path = rest.strip_prefix(self.authority.as_str())?;
        if path.is_empty() {
            return Some(path);
        }
        path.strip_prefix('/')
    }
}
