//! Transcript store adapters
//!
//! Three implementations of the [`TranscriptStore`] port, one per mode:
//!
//! - [`JsonTranscriptStore`] — mirrored to a JSON snapshot file (default)
//! - [`MemoryTranscriptStore`] — in-memory only (`--memory-only`)
//! - [`NullTranscriptStore`] — keeps nothing (`--no-history`)
//!
//! [`TranscriptStore`]: patter_application::TranscriptStore

mod json_store;
mod memory;
mod null;

pub use json_store::{JsonTranscriptStore, SnapshotError};
pub use memory::MemoryTranscriptStore;
pub use null::NullTranscriptStore;
