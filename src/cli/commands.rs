use anyhow::{Result, bail};
use crossterm::terminal;

use crate::{
    app::AppContext,
    cli::args::{Cli, Command},
    format, tui,
};
use wordlist::{INSERT_FAILED, Route, Table, UPDATE_FAILED, WordValues};

pub(crate) fn dispatch(app: &AppContext, cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Some(Command::List) => print_table(app.resolver().query(Route::AllItems, None), json),
        Some(Command::Get { position }) => print_table(
            app.store().query(position).map(Table::from_entries),
            json,
        ),
        Some(Command::Search { text }) => {
            print_table(app.resolver().query(Route::AllItems, Some(&text)), json)
        }
        Some(Command::Count) => print_table(app.resolver().query(Route::Count, None), json),
        Some(Command::Add { word }) => add_word(app, &word),
        Some(Command::Update { id, word }) => update_word(app, id, &word),
        Some(Command::Delete { id }) => delete_word(app, id),
        Some(Command::Query { uri }) => {
            let route = Route::parse(&uri, app.store().contract())?;
            print_table(app.resolver().query(route, None), json)
        }
        Some(Command::Version) => {
            println!("words {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => match cli.word {
            Some(word) => add_word(app, &word),
            None => tui::run_tui(app.store()),
        },
    }
}

fn add_word(app: &AppContext, word: &str) -> Result<()> {
    let id = app
        .resolver()
        .insert(Route::AllItems, &WordValues::new(word))?;
    if id == INSERT_FAILED {
        bail!("could not add {word:?}");
    }
    println!("{}", app.store().contract().entry_uri(id));
    Ok(())
}

fn update_word(app: &AppContext, id: i64, word: &str) -> Result<()> {
    let rows = app
        .resolver()
        .update(Route::Single(id), &WordValues::new(word))?;
    if rows == UPDATE_FAILED {
        bail!("could not update entry {id}");
    }
    println!("{rows} updated");
    Ok(())
}

fn delete_word(app: &AppContext, id: i64) -> Result<()> {
    let rows = app.resolver().delete(Route::Single(id))?;
    println!("{rows} deleted");
    Ok(())
}

fn print_table(table: Option<Table>, json: bool) -> Result<()> {
    let Some(table) = table else {
        bail!("query failed");
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let terminal_width = terminal::size()
        .map(|(width, _)| width as usize)
        .unwrap_or(80);
    for row in &table.rows {
        println!("{}", format::format_row(row, terminal_width));
    }
    Ok(())
}
