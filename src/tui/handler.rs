use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wordlist::{INSERT_FAILED, UPDATE_FAILED, WordStore};

use super::state::{Focus, TuiState};

#[derive(Clone, Copy, Debug)]
enum Action {
    Quit,
    CancelEdit,
    ToggleFocus,
    ActivateSearch,
    Submit,
    EditSelected,
    DeleteSelected,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Backspace,
    Delete,
    InsertChar(char),
}

/// Applies one key press. Returns `true` when the browser should close.
pub(crate) fn handle_tui_key(store: &WordStore, state: &mut TuiState, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key_to_action(&key, state) {
        Some(action) => apply_action(store, state, action),
        None => false,
    }
}

fn key_to_action(key: &KeyEvent, state: &TuiState) -> Option<Action> {
    let code = key.code;
    let focus = state.focus;

    if matches!(
        (code, key.modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
    ) {
        return Some(Action::Quit);
    }

    if matches!(code, KeyCode::Esc) {
        if state.editing.is_some() {
            return Some(Action::CancelEdit);
        }
        return Some(Action::Quit);
    }

    if matches!(code, KeyCode::Tab) {
        return Some(Action::ToggleFocus);
    }

    if matches!(code, KeyCode::Enter) {
        return match focus {
            Focus::Input => Some(Action::Submit),
            Focus::Search => Some(Action::ToggleFocus),
            Focus::List => Some(Action::EditSelected),
        };
    }

    if matches!(focus, Focus::List) {
        return match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            KeyCode::Char('/') => Some(Action::ActivateSearch),
            KeyCode::Char('e') => Some(Action::EditSelected),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            _ => None,
        };
    }

    match code {
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete if matches!(focus, Focus::Input) => Some(Action::Delete),
        KeyCode::Char(ch) => Some(Action::InsertChar(ch)),
        _ => None,
    }
}

fn apply_action(store: &WordStore, state: &mut TuiState, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::CancelEdit => state.cancel_edit(),
        Action::ToggleFocus => state.toggle_focus(),
        Action::ActivateSearch => state.activate_search(),
        Action::Submit => submit_input(store, state),
        Action::EditSelected => state.begin_edit(),
        Action::DeleteSelected => delete_selected(store, state),
        Action::MoveUp => state.move_selection_up(),
        Action::MoveDown => state.move_selection_down(),
        Action::MoveLeft => {
            if matches!(state.focus, Focus::Input) {
                state.input.move_left();
            }
        }
        Action::MoveRight => {
            if matches!(state.focus, Focus::Input) {
                state.input.move_right();
            }
        }
        Action::Backspace => match state.focus {
            Focus::Input => state.input.backspace(),
            Focus::Search => {
                state.search.backspace();
                refresh_matches(store, state);
            }
            Focus::List => {}
        },
        Action::Delete => state.input.delete_char(),
        Action::InsertChar(ch) => match state.focus {
            Focus::Input => state.input.insert_char(ch),
            Focus::Search => {
                state.search.insert_char(ch);
                refresh_matches(store, state);
            }
            Focus::List => {}
        },
    }
    false
}

/// Reloads every entry, sorted by word.
pub(crate) fn load_entries(store: &WordStore, state: &mut TuiState) {
    match store.query(store.contract().all_items) {
        Some(entries) => state.set_entries(entries),
        None => state.input.status = Some("could not read the word list".to_string()),
    }
}

fn refresh_matches(store: &WordStore, state: &mut TuiState) {
    if state.search.query.is_empty() {
        state.set_matches(None);
        return;
    }
    match store.search(&state.search.query) {
        Some(words) => state.set_matches(Some(words)),
        None => state.input.status = Some("search failed".to_string()),
    }
}

fn submit_input(store: &WordStore, state: &mut TuiState) {
    if state.input.is_empty() {
        return;
    }
    let word = state.input.text.trim().to_string();
    let status = match state.editing {
        Some(id) => match store.update(id, &word) {
            UPDATE_FAILED => format!("could not update #{id}"),
            0 => format!("#{id} no longer exists"),
            _ => format!("updated #{id}"),
        },
        None => match store.insert(&word) {
            INSERT_FAILED => format!("could not add {word:?}"),
            id => format!("added #{id}"),
        },
    };
    state.cancel_edit();
    load_entries(store, state);
    refresh_matches(store, state);
    state.input.status = Some(status);
}

fn delete_selected(store: &WordStore, state: &mut TuiState) {
    let Some(id) = state.selected_entry().map(|entry| entry.id) else {
        return;
    };
    let status = match store.delete(id) {
        0 => format!("could not delete #{id}"),
        _ => format!("deleted #{id}"),
    };
    load_entries(store, state);
    refresh_matches(store, state);
    state.input.status = Some(status);
}
