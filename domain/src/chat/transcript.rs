//! Bounded rolling conversation log

use crate::chat::entities::{Message, Speaker};

/// Default number of messages kept in a transcript.
pub const DEFAULT_CAPACITY: usize = 10;

/// Rendered in place of the log when nothing has been said yet.
pub const EMPTY_TRANSCRIPT_NOTICE: &str = "No conversation history yet.";

/// A chronological log of messages, bounded at a fixed capacity.
///
/// Pushing past capacity evicts the oldest entry (FIFO — entries are never
/// reordered by access). Order is insertion order and is meaningful: the
/// transcript reads oldest-first.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    capacity: usize,
}

impl Transcript {
    /// Create an empty transcript with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty transcript bounded at `capacity` messages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: Vec::new(),
            capacity,
        }
    }

    /// Rebuild a transcript from previously recorded messages.
    ///
    /// Keeps only the **last** `capacity` entries — the most recent window
    /// survives a reload, not the oldest.
    pub fn from_messages(messages: Vec<Message>, capacity: usize) -> Self {
        let start = messages.len().saturating_sub(capacity);
        Self {
            messages: messages[start..].to_vec(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message, evicting the oldest entries past capacity.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        while self.messages.len() > self.capacity {
            self.messages.remove(0);
        }
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Render the transcript for display.
    ///
    /// Empty transcripts render as [`EMPTY_TRANSCRIPT_NOTICE`]; otherwise a
    /// header line is followed by one indented line per message, oldest
    /// first, with the user labeled "You" and any other speaker "Bot".
    pub fn render(&self) -> String {
        if self.messages.is_empty() {
            return EMPTY_TRANSCRIPT_NOTICE.to_string();
        }

        let mut lines = vec!["Conversation history:".to_string()];
        for message in &self.messages {
            let label = match message.speaker {
                Speaker::User => "You",
                _ => "Bot",
            };
            lines.push(format!("  {}: {}", label, message.text));
        }
        lines.join("\n")
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
