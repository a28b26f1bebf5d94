//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for patter
#[derive(Parser, Debug)]
#[command(name = "patter")]
#[command(author, version, about = "Rule-based chat responder with a rolling history")]
#[command(long_about = r#"
Patter is a keyword-table chatbot: it matches your input against a small
fixed table of triggers and replies, and keeps a rolling history of the
last few messages.

By default the history is mirrored to ./chat_history.json after every
message and reloaded on the next start. Use --memory-only to keep it for
the session only, or --no-history to track nothing at all.

In the chat, type 'history' to see the transcript, 'clear' to wipe it,
and 'exit' (or 'quit', 'bye', 'goodbye') to leave.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./patter.toml       Project-level config
3. ~/.config/patter/config.toml   Global config
"#)]
pub struct Cli {
    /// Keep history for this session only, never touching the disk
    #[arg(long)]
    pub memory_only: bool,

    /// Track no history at all (plain responder loop)
    #[arg(long, conflicts_with = "memory_only")]
    pub no_history: bool,

    /// Path of the history snapshot file
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Maximum number of messages kept in the rolling history
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
