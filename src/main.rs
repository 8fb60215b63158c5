mod app;
mod cli;
mod config;
mod error;
mod storage;
mod ui;

use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::storage::StateStorage;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config: Config = confy::load("nanobanana", None)?;
    let data_dir = cli.data_dir.unwrap_or(config.data_directory);

    let storage = StateStorage::open(data_dir)?;
    let today = Local::now().date_naive();
    let mut state = storage.load(today);

    // One-time import of the flat task file from before lists existed.
    // The file is only removed once its tasks are safely in the state.
    if let Some(items) = storage.read_legacy() {
        if state.import_legacy(items, today) {
            storage.save(&state)?;
            storage.remove_legacy()?;
            info!("imported legacy tasks into the default list");
        }
    }

    // Daily recurrence reset, at most once per calendar day.
    if storage.last_run() != Some(today) {
        let reset = state.reset_recurring_lists();
        storage.set_last_run(today)?;
        storage.save(&state)?;
        if reset > 0 {
            info!(reset, "reset tasks in recurring lists");
        }
    }

    let mut app = App::new(state, storage);
    app::run_tui(&mut app)
}

/// Logging goes to stderr so it never corrupts the TUI; enable it with
/// e.g. RUST_LOG=nanobanana=debug and a redirect.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
