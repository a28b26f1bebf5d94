//! In-memory transcript store

use patter_application::TranscriptStore;
use patter_domain::{Message, Transcript};

/// Transcript store with no backing file.
///
/// The session behaves exactly like the persisted mode, but nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct MemoryTranscriptStore {
    transcript: Transcript,
}

impl MemoryTranscriptStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            transcript: Transcript::with_capacity(capacity),
        }
    }
}

impl TranscriptStore for MemoryTranscriptStore {
    fn record(&mut self, message: Message) {
        self.transcript.push(message);
    }

    fn clear(&mut self) {
        self.transcript.clear();
    }

    fn render(&self) -> String {
        self.transcript.render()
    }

    fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_save_path() {
        let store = MemoryTranscriptStore::new(10);
        assert!(store.save_path().is_none());
    }

    #[test]
    fn test_bounded_like_transcript() {
        let mut store = MemoryTranscriptStore::new(2);
        store.record(Message::user("a"));
        store.record(Message::user("b"));
        store.record(Message::user("c"));
        let texts: Vec<&str> = store.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }
}
