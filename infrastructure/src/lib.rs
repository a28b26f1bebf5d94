//! Infrastructure layer for patter
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileHistoryConfig, FileReplConfig};
pub use persistence::{
    JsonTranscriptStore, MemoryTranscriptStore, NullTranscriptStore, SnapshotError,
};
