use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wordlist::Cell;

const ID_COLUMN_WIDTH: usize = 4;

/// `  12  word`, truncated with an ellipsis to `max_width` display columns.
pub(crate) fn format_entry_line(id: i64, word: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let id_label = format!("{:>width$}", id, width = ID_COLUMN_WIDTH);
    let prefix = format!("{}  ", id_label);
    let prefix_width = UnicodeWidthStr::width(prefix.as_str());
    let clean_word = sanitize_content(word);
    if max_width <= prefix_width {
        return truncate_with_ellipsis(&id_label, max_width);
    }

    let word_width = max_width.saturating_sub(prefix_width);
    let truncated = truncate_with_ellipsis(&clean_word, word_width);
    format!("{}{}", prefix, truncated)
}

pub(crate) fn format_row(row: &[Cell], max_width: usize) -> String {
    if let [Cell::Integer(id), Cell::Text(word)] = row {
        return format_entry_line(*id, word, max_width);
    }
    let line = row
        .iter()
        .map(|cell| match cell {
            Cell::Integer(value) => value.to_string(),
            Cell::Text(value) => sanitize_content(value),
        })
        .collect::<Vec<_>>()
        .join("  ");
    truncate_with_ellipsis(&line, max_width)
}

fn sanitize_content(content: &str) -> String {
    content
        .replace(['\n', '\r', '\t'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_with_ellipsis(value: &str, max_width: usize) -> String {
    let value_width = UnicodeWidthStr::width(value);
    if value_width <= max_width {
        return value.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut current_width = 0;
    let mut result = String::new();
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if current_width + ch_width > max_width - 3 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("...");
    result
}
