//! Chat domain.
//!
//! - [`entities::Message`] — a single message in the conversation
//! - [`transcript::Transcript`] — bounded rolling log of messages
//! - [`command::Command`] — classification of one line of operator input

pub mod command;
pub mod entities;
pub mod transcript;
