//! Interactive chat module
//!
//! Provides a readline-based interactive chat loop.

mod repl;

pub use repl::ChatRepl;
