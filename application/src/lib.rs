//! Application layer for patter
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::transcript_store::TranscriptStore;
pub use use_cases::chat_turn::{ChatTurnUseCase, TurnOutcome};
