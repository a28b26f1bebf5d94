//! Chat turn use case
//!
//! One step of the session loop: classify a line of operator input, mutate
//! the transcript store accordingly, and produce the outcome the
//! presentation layer should show. The loop itself stays free of chat
//! semantics.

use crate::ports::transcript_store::TranscriptStore;
use patter_domain::{Command, Message, Responder};
use tracing::debug;

/// Reply to a blank line. Nothing is recorded for blanks.
pub const BLANK_INPUT_REPLY: &str = "Say something — I'm listening.";

/// Confirmation after wiping the transcript.
pub const CLEARED_REPLY: &str = "History cleared.";

/// What the session loop should do with the outcome of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input: show a prompt-for-input reply and keep going.
    Prompt(String),
    /// Exit keyword: show the farewell and stop the loop.
    Farewell(String),
    /// History command: show the rendered transcript.
    ShowHistory(String),
    /// Clear command: show a confirmation.
    Cleared(String),
    /// Ordinary chat: show the bot's reply.
    Reply(String),
}

impl TurnOutcome {
    /// The text to present to the operator.
    pub fn text(&self) -> &str {
        match self {
            TurnOutcome::Prompt(s)
            | TurnOutcome::Farewell(s)
            | TurnOutcome::ShowHistory(s)
            | TurnOutcome::Cleared(s)
            | TurnOutcome::Reply(s) => s,
        }
    }

    /// Whether the session loop should terminate after this outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnOutcome::Farewell(_))
    }
}

/// Use case driving one turn of the conversation.
pub struct ChatTurnUseCase<S: TranscriptStore> {
    store: S,
    responder: Responder,
}

impl<S: TranscriptStore> ChatTurnUseCase<S> {
    pub fn new(store: S, responder: Responder) -> Self {
        Self { store, responder }
    }

    /// The transcript store, for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle one line of operator input.
    pub fn handle_line(&mut self, line: &str) -> TurnOutcome {
        let command = Command::classify(line);
        debug!(?command, "classified input");

        match command {
            Command::Blank => TurnOutcome::Prompt(BLANK_INPUT_REPLY.to_string()),
            Command::Exit => TurnOutcome::Farewell(self.farewell()),
            Command::History => {
                let rendered = self.store.render();
                // The literal command text goes into the log as a user
                // message, after rendering, with no bot reply alongside it.
                self.store.record(Message::user(line.trim()));
                TurnOutcome::ShowHistory(rendered)
            }
            Command::Clear => {
                self.store.clear();
                TurnOutcome::Cleared(CLEARED_REPLY.to_string())
            }
            Command::Say(text) => {
                self.store.record(Message::user(text.clone()));
                let reply = self.responder.respond(&text);
                self.store.record(Message::bot(reply.clone()));
                TurnOutcome::Reply(reply)
            }
        }
    }

    /// The farewell line, also used by the interrupt/end-of-input path.
    ///
    /// Mentions the save path when the store has one: the on-disk snapshot
    /// already matches memory at this point, every mutation persisted
    /// synchronously.
    pub fn farewell(&self) -> String {
        match self.store.save_path() {
            Some(path) => format!(
                "Goodbye! Your conversation is saved in {}.",
                path.display()
            ),
            None => "Goodbye!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patter_domain::{Speaker, Transcript};
    use std::path::{Path, PathBuf};

    struct MemoryStore {
        transcript: Transcript,
        path: Option<PathBuf>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                transcript: Transcript::new(),
                path: None,
            }
        }
    }

    impl TranscriptStore for MemoryStore {
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

        fn save_path(&self) -> Option<&Path> {
            self.path.as_deref()
        }
    }

    fn use_case() -> ChatTurnUseCase<MemoryStore> {
        ChatTurnUseCase::new(MemoryStore::new(), Responder::builtin())
    }

    #[test]
    fn test_blank_input_records_nothing() {
        let mut uc = use_case();
        let outcome = uc.handle_line("   ");
        assert_eq!(outcome, TurnOutcome::Prompt(BLANK_INPUT_REPLY.to_string()));
        assert!(uc.store().messages().is_empty());
    }

    #[test]
    fn test_say_records_both_sides() {
        let mut uc = use_case();
        let outcome = uc.handle_line("hello there");

        assert_eq!(
            outcome,
            TurnOutcome::Reply("Hello! How can I help you today?".to_string())
        );
        let messages = uc.store().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].speaker, Speaker::User);
        assert_eq!(messages[0].text, "hello there");
        assert_eq!(messages[1].speaker, Speaker::Bot);
        assert_eq!(messages[1].text, "Hello! How can I help you today?");
    }

    #[test]
    fn test_exit_is_terminal_and_records_nothing() {
        let mut uc = use_case();
        let outcome = uc.handle_line("exit");
        assert!(outcome.is_terminal());
        assert_eq!(outcome.text(), "Goodbye!");
        assert!(uc.store().messages().is_empty());
    }

    #[test]
    fn test_farewell_mentions_save_path() {
        let store = MemoryStore {
            transcript: Transcript::new(),
            path: Some(PathBuf::from("chat_history.json")),
        };
        let uc = ChatTurnUseCase::new(store, Responder::builtin());
        assert_eq!(
            uc.farewell(),
            "Goodbye! Your conversation is saved in chat_history.json."
        );
    }

    #[test]
    fn test_history_command_is_recorded_as_user_message() {
        let mut uc = use_case();
        uc.handle_line("hi");

        let outcome = uc.handle_line("History");
        // rendered transcript shows the turn before the command...
        match &outcome {
            TurnOutcome::ShowHistory(rendered) => {
                assert!(rendered.contains("You: hi"));
                assert!(!rendered.contains("History"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        // ...and the literal command text lands in the log afterwards,
        // with no bot message paired to it
        let last = uc.store().messages().last().unwrap();
        assert_eq!(last.speaker, Speaker::User);
        assert_eq!(last.text, "History");
    }

    #[test]
    fn test_clear_wipes_and_records_nothing() {
        let mut uc = use_case();
        uc.handle_line("hello");
        assert!(!uc.store().messages().is_empty());

        let outcome = uc.handle_line("clear");
        assert_eq!(outcome, TurnOutcome::Cleared(CLEARED_REPLY.to_string()));
        assert!(uc.store().messages().is_empty());
    }

    #[test]
    fn test_fallback_reply_cannot_end_the_session() {
        // Exit detection is input-side only; no reply text is ever
        // re-inspected for control keywords.
        let mut uc = use_case();
        let outcome = uc.handle_line("what time is it?");
        assert!(!outcome.is_terminal());
    }
}
