//! Domain layer for patter
//!
//! This crate contains the core entities and reply logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Responder
//!
//! A pure keyword matcher: the input is tested against an ordered table of
//! trigger substrings and the first hit wins. When nothing matches, one of
//! a small pool of fallback replies is drawn at random.
//!
//! ## Transcript
//!
//! A rolling conversation log bounded at a fixed capacity. Inserting past
//! capacity evicts the oldest entry, so the transcript is always the most
//! recent window of the chat.

pub mod chat;
pub mod responder;

// Re-export commonly used types
pub use chat::{
    command::Command,
    entities::{Message, Speaker},
    transcript::{Transcript, DEFAULT_CAPACITY, EMPTY_TRANSCRIPT_NOTICE},
};
pub use responder::{Responder, ResponseTable};
