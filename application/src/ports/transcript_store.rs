//! Port for conversation transcript storage.
//!
//! Defines the [`TranscriptStore`] trait the session loop records into.
//! Implementations range from a plain in-memory log to one mirrored to a
//! JSON snapshot file after every mutation; the loop never knows which it
//! has.
//!
//! Mutations are intentionally non-fallible: a store that cannot persist
//! reports the problem to the operator (via `tracing`) and keeps serving
//! from memory — the in-memory state is authoritative for the session.

use patter_domain::Message;
use std::path::Path;

/// Port for recording and rendering the conversation transcript.
pub trait TranscriptStore {
    /// Append a message, evicting the oldest past capacity.
    fn record(&mut self, message: Message);

    /// Drop every recorded message.
    fn clear(&mut self);

    /// Render the transcript for display.
    fn render(&self) -> String;

    /// Messages currently held, oldest first.
    fn messages(&self) -> &[Message];

    /// Where the transcript is persisted, if anywhere.
    ///
    /// `None` for stores with no backing file.
    fn save_path(&self) -> Option<&Path> {
        None
    }
}
