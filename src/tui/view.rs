use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{Focus, TuiState};
use crate::format::format_entry_line;

pub(crate) fn draw_tui(frame: &mut Frame<'_>, state: &TuiState) {
    let layout = split_layout(frame.area(), state.is_search_visible());

    draw_input(frame, state, layout.input_area);
    draw_entries(frame, state, layout.list_area);
    if let Some(search_area) = layout.search_area {
        draw_search(frame, state, search_area);
    }
}

fn draw_input(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let input_widget = Paragraph::new(Line::from(state.input.text.as_str())).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format_input_title(state))
            .border_style(focus_style(state.focus, Focus::Input)),
    );
    frame.render_widget(input_widget, area);
    if matches!(state.focus, Focus::Input) {
        frame.set_cursor_position(state.input.cursor_position(area));
    }
}

fn draw_entries(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let row_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .entries
        .iter()
        .map(|entry| ListItem::new(format_entry_line(entry.id, &entry.word, row_width)))
        .collect();
    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(list_title(state))
                .border_style(focus_style(state.focus, Focus::List)),
        )
        .highlight_style(focus_style(state.focus, Focus::List));
    let mut list_state = ListState::default();
    list_state.select(state.selected);
    frame.render_stateful_widget(list_widget, area, &mut list_state);
}

fn draw_search(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let search_widget = Paragraph::new(Line::from(format!("/{}", state.search.query)))
        .style(focus_style(state.focus, Focus::Search));
    frame.render_widget(search_widget, area);
    if matches!(state.focus, Focus::Search) {
        frame.set_cursor_position(state.search.cursor_position_inline(area));
    }
}

fn format_input_title(state: &TuiState) -> String {
    let label = match state.editing {
        Some(id) => format!("Edit #{id}"),
        None => "New Word".to_string(),
    };
    let active_label = if matches!(state.focus, Focus::Input) {
        " [active]"
    } else {
        ""
    };
    let title = format!("{label}{active_label} (Enter save, Tab switch, Esc exit)");
    match state.input.status.as_deref() {
        Some(status) => format!("{title} - {status}"),
        None => title,
    }
}

fn list_title(state: &TuiState) -> String {
    let count = state.entries.len();
    if matches!(state.focus, Focus::List) {
        format!("Words ({count}) [active] (e edit, d delete, / search, q quit)")
    } else {
        format!("Words ({count}) (Tab switch)")
    }
}

fn focus_style(current: Focus, target: Focus) -> Style {
    if current == target {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

struct LayoutAreas {
    input_area: Rect,
    list_area: Rect,
    search_area: Option<Rect>,
}

fn split_layout(area: Rect, show_search: bool) -> LayoutAreas {
    // Search is a single-line prompt beneath the list (vim-style).
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(1)];
    if show_search {
        constraints.push(Constraint::Length(1));
    }
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    LayoutAreas {
        input_area: areas[0],
        list_area: areas[1],
        search_area: show_search.then(|| areas[2]),
    }
}
