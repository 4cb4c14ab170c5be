use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wordlist::{WordEntry, WordId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
    Search,
    Input,
    List,
}

pub(crate) struct TuiState {
    pub(crate) search: SearchState,
    pub(crate) input: InputState,
    pub(crate) entries: Vec<WordEntry>,
    all_entries: Vec<WordEntry>,
    matches: Option<Vec<String>>,
    pub(crate) focus: Focus,
    pub(crate) selected: Option<usize>,
    pub(crate) editing: Option<WordId>,
}

impl TuiState {
    pub(crate) fn new(entries: Vec<WordEntry>) -> Self {
        let mut state = Self {
            search: SearchState::new(),
            input: InputState::new(),
            entries: Vec::new(),
            all_entries: entries,
            matches: None,
            focus: Focus::Input,
            selected: None,
            editing: None,
        };
        state.apply_search();
        state
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::List,
            Focus::List => Focus::Input,
            Focus::Input => Focus::List,
        };
    }

    pub(crate) fn activate_search(&mut self) {
        self.focus = Focus::Search;
        self.search.clear();
        self.set_matches(None);
    }

    pub(crate) fn set_entries(&mut self, entries: Vec<WordEntry>) {
        self.all_entries = entries;
        self.apply_search();
    }

    /// Words returned by the store for the current search, or `None` to show everything.
    pub(crate) fn set_matches(&mut self, matches: Option<Vec<String>>) {
        self.matches = matches;
        self.apply_search();
    }

    fn apply_search(&mut self) {
        self.entries = match &self.matches {
            None => self.all_entries.clone(),
            Some(words) => self
                .all_entries
                .iter()
                .filter(|entry| words.contains(&entry.word))
                .cloned()
                .collect(),
        };
        self.selected = match self.selected {
            _ if self.entries.is_empty() => None,
            Some(index) => Some(index.min(self.entries.len() - 1)),
            None => Some(0),
        };
    }

    pub(crate) fn selected_entry(&self) -> Option<&WordEntry> {
        self.selected.and_then(|index| self.entries.get(index))
    }

    pub(crate) fn move_selection_up(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some(current.saturating_sub(1));
        }
    }

    pub(crate) fn move_selection_down(&mut self) {
        if let Some(current) = self.selected {
            let max_index = self.entries.len().saturating_sub(1);
            self.selected = Some((current + 1).min(max_index));
        }
    }

    /// Loads the selected entry into the input for editing.
    pub(crate) fn begin_edit(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let (id, word) = (entry.id, entry.word.clone());
        self.editing = Some(id);
        self.input.set_text(&word);
        self.focus = Focus::Input;
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.editing = None;
        self.input.clear();
    }

    pub(crate) fn is_search_visible(&self) -> bool {
        matches!(self.focus, Focus::Search) || !self.search.query.is_empty()
    }
}

pub(crate) struct SearchState {
    pub(crate) query: String,
}

impl SearchState {
    fn new() -> Self {
        Self {
            query: String::new(),
        }
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub(crate) fn backspace(&mut self) {
        self.query.pop();
    }

    pub(crate) fn clear(&mut self) {
        self.query.clear();
    }

    pub(crate) fn cursor_position_inline(&self, area: Rect) -> (u16, u16) {
        let col = UnicodeWidthStr::width(self.query.as_str()) as u16;
        (area.x + col + 1, area.y)
    }
}

/// Single-line word editor. `cursor` counts chars, not bytes.
pub(crate) struct InputState {
    pub(crate) text: String,
    pub(crate) status: Option<String>,
    cursor: usize,
}

impl InputState {
    fn new() -> Self {
        Self {
            text: String::new(),
            status: None,
            cursor: 0,
        }
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        let byte_index = byte_index_at_char(&self.text, self.cursor);
        self.text.insert(byte_index, ch);
        self.cursor += 1;
        self.status = None;
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    pub(crate) fn delete_char(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.remove_at_cursor();
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
        self.status = None;
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub(crate) fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = width_up_to_char(&self.text, self.cursor) as u16;
        (area.x + col + 1, area.y + 1)
    }

    fn remove_at_cursor(&mut self) {
        let remove_at = byte_index_at_char(&self.text, self.cursor);
        if let Some(ch) = self.text[remove_at..].chars().next() {
            self.text.replace_range(remove_at..remove_at + ch.len_utf8(), "");
        }
        self.status = None;
    }
}

fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

fn width_up_to_char(value: &str, char_index: usize) -> usize {
    value
        .chars()
        .take(char_index)
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}
