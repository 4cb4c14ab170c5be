use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordlist::Config;

mod app;
mod cli;
mod format;
mod tui;

use app::AppContext;
use cli::{args::Cli, commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.is_interactive());

    let config = Config::load(cli.db.clone())?;
    tracing::debug!("using database {}", config.db_path.display());
    let app = AppContext::new(config);
    commands::dispatch(&app, cli)
}

fn init_tracing(verbose: u8, interactive: bool) {
    // The browser owns the screen; only failures are worth drawing over it.
    let level = match verbose {
        0 if interactive => "warn",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
