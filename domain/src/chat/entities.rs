//! Chat domain entities

use serde::{Deserialize, Serialize};

/// Who said a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Wire name of the speaker, as written into history snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Bot => "bot",
        }
    }

    /// Parse a speaker from its wire name.
    ///
    /// Anything that is not "user" maps to [`Speaker::Bot`]: display rules
    /// already collapse every non-user speaker to the bot label, so an
    /// unexpected value in a hand-edited snapshot cannot poison rendering.
    pub fn from_wire(s: &str) -> Self {
        if s == "user" {
            Speaker::User
        } else {
            Speaker::Bot
        }
    }
}

/// A message in a conversation (Entity)
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}
