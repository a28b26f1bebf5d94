//! CLI entrypoint for patter
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use patter_application::{ChatTurnUseCase, TranscriptStore};
use patter_domain::Responder;
use patter_infrastructure::{
    ConfigLoader, JsonTranscriptStore, MemoryTranscriptStore, NullTranscriptStore,
};
use patter_presentation::{ChatRepl, Cli};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load file config, then let CLI flags override it
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let capacity = cli.capacity.unwrap_or(config.history.capacity);
    let history_file = cli
        .history_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.history.file));
    let persist = config.history.persist && !cli.memory_only && !cli.no_history;
    let banner = config.repl.banner && !cli.quiet;

    info!(
        capacity,
        persist,
        no_history = cli.no_history,
        "Starting patter"
    );

    // === Dependency Injection ===
    let responder = Responder::builtin();

    if cli.no_history {
        run_chat(NullTranscriptStore::new(), responder, banner)
    } else if persist {
        run_chat(
            JsonTranscriptStore::open(history_file, capacity),
            responder,
            banner,
        )
    } else {
        run_chat(MemoryTranscriptStore::new(capacity), responder, banner)
    }
}

fn run_chat<S: TranscriptStore>(store: S, responder: Responder, banner: bool) -> Result<()> {
    let use_case = ChatTurnUseCase::new(store, responder);
    let mut repl = ChatRepl::new(use_case).with_banner(banner);
    repl.run()?;
    Ok(())
}
