//! Ticker Search — a terminal host for the ticker autocomplete engine. It loads the
//! company list from a JSON file or an HTTP endpoint, reads typing and click events
//! from stdin, and prints the debounced suggestion dropdown to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! ticker_search --companies ./companies.json --logos local
//! ticker_search --url http://127.0.0.1:5000/api/companies --logos remote
//! ```
//!
//! Every stdin line is one event: plain text replaces the input value, `:select <n>`,
//! `:click-outside`, `:logo-error <n>` and `:quit` stand in for mouse actions, and a
//! leading `::` types a literal `:`. See `model::event` for details.
#![warn(missing_docs)]
mod args;
mod event_loop;
mod model;
mod reader;
mod view;

use crate::args::Args;
use crate::reader::EventReader;
use crate::view::TerminalView;
use clap::Parser;
use crossbeam_channel::unbounded;
use log::{error, info};
use suggest_common::company::companies_from_file;
use suggest_common::{CompanyStore, EngineConfig, SuggestError, SuggestionEngine};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

fn main() -> Result<(), SuggestError> {
    dotenv::dotenv().ok();
    init_logger();
    let args = Args::parse();

    let mut config = EngineConfig::from_env()?;
    args.apply(&mut config)?;
    info!(
        "Debounce {:?}, up to {} suggestions, {} logos",
        config.debounce, config.max_suggestions, config.logos.strategy
    );

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| SuggestError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;
    }

    let store = CompanyStore::new();
    if let Some(path) = &args.companies {
        let companies = companies_from_file(&normalize_path(path)).unwrap_or_else(|e| {
            error!("Error loading companies from {}: {}", path, e);
            Vec::new()
        });
        store.load(companies);
    } else if let Some(url) = &args.url {
        info!("Fetching companies from {}", url);
        store.spawn_fetch(url);
    }

    let (event_tx, event_rx) = unbounded();
    EventReader::start(BufReader::new(io::stdin()), event_tx, shutdown.clone());

    let mut engine = SuggestionEngine::new(store, TerminalView::new(io::stdout()), config);
    info!("Type to search. Press Ctrl+C or enter :quit to exit.");
    event_loop::run(&mut engine, event_rx, shutdown);

    info!("Last input value: {:?}", engine.view().input());
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
