//! Transcript store that keeps nothing

use patter_application::TranscriptStore;
use patter_domain::{Message, EMPTY_TRANSCRIPT_NOTICE};

/// Store for the plain mode: every record is discarded.
///
/// `render` always reports the empty-transcript notice, so the `history`
/// command stays answerable even when nothing is tracked.
#[derive(Debug, Default)]
pub struct NullTranscriptStore;

impl NullTranscriptStore {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptStore for NullTranscriptStore {
    fn record(&mut self, _message: Message) {}

    fn clear(&mut self) {}

    fn render(&self) -> String {
        EMPTY_TRANSCRIPT_NOTICE.to_string()
    }

    fn messages(&self) -> &[Message] {
        &[]
    }
}
