//! JSON snapshot transcript store.
//!
//! The whole transcript is rewritten to the backing file after every
//! mutation as a pretty-printed JSON array of `[speaker, text]` pairs:
//!
//! ```json
//! [
//!   ["user", "hi"],
//!   ["bot", "Hi there! What would you like to talk about?"]
//! ]
//! ```
//!
//! Wholesale rewrite is fine at this scale (the transcript is capped at a
//! handful of entries) and keeps the file readable by hand. The file
//! handle is scoped to each write and flushed before it closes, on every
//! path including interrupt-driven shutdown.

use patter_application::TranscriptStore;
use patter_domain::{Message, Speaker, Transcript};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reading or writing a transcript snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not a sequence of [speaker, text] pairs: {0}")]
    Format(#[from] serde_json::Error),
}

/// Transcript store mirrored to a JSON snapshot file.
///
/// The snapshot is loaded once at construction (best-effort: a missing or
/// malformed file yields an empty transcript) and rewritten in full after
/// every `record` and `clear`. A failed write is reported to the operator
/// as a warning and the session continues — the in-memory transcript is
/// authoritative.
pub struct JsonTranscriptStore {
    transcript: Transcript,
    path: PathBuf,
}

impl JsonTranscriptStore {
    /// Open a store backed by `path`, keeping at most `capacity` messages.
    ///
    /// If the file holds more than `capacity` entries, only the most
    /// recent `capacity` survive the load.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let transcript = match Self::load(&path, capacity) {
            Ok(transcript) => transcript,
            Err(e) => {
                // Absent or unreadable snapshots start a fresh session;
                // the operator is not bothered about it.
                debug!("Starting with empty history ({}: {})", path.display(), e);
                Transcript::with_capacity(capacity)
            }
        };
        Self { transcript, path }
    }

    fn load(path: &Path, capacity: usize) -> Result<Transcript, SnapshotError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<(String, String)> = serde_json::from_str(&raw)?;
        let messages = entries
            .into_iter()
            .map(|(speaker, text)| Message {
                speaker: Speaker::from_wire(&speaker),
                text,
            })
            .collect();
        Ok(Transcript::from_messages(messages, capacity))
    }

    fn write_snapshot(&self) -> Result<(), SnapshotError> {
        let entries: Vec<(&str, &str)> = self
            .transcript
            .messages()
            .iter()
            .map(|m| (m.speaker.as_str(), m.text.as_str()))
            .collect();

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &entries)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.write_snapshot() {
            warn!("Could not save history to {}: {}", self.path.display(), e);
        }
    }
}

impl TranscriptStore for JsonTranscriptStore {
    fn record(&mut self, message: Message) {
        self.transcript.push(message);
        self.persist();
    }

    fn clear(&mut self) {
        self.transcript.clear();
        self.persist();
    }

    fn render(&self) -> String {
        self.transcript.render()
    }

    fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    fn save_path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
