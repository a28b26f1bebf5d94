//! Presentation layer for patter
//!
//! This crate contains the CLI definition and the interactive chat loop.

pub mod chat;
pub mod cli;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
