mod text;

pub(crate) use text::{format_entry_line, format_row};
