//! Keyword-table responder
//!
//! [`Responder`] maps one line of input to a canned reply: first keyword in
//! the table found as a case-insensitive substring wins, and when nothing
//! matches a fallback reply is drawn uniformly at random.

use rand::seq::SliceRandom;

/// Reply given when asked to respond to an empty line.
pub const EMPTY_INPUT_REPLY: &str = "Say something so I can respond!";

/// Ordered trigger → reply table, first substring match wins.
///
/// Iteration order is the order entries were listed in, and it is part of
/// the contract: "thank you so much" hits "thank you" only because nothing
/// earlier in the table matches first.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    entries: Vec<(String, String)>,
}

impl ResponseTable {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// The built-in table. Order matters and is fixed:
    /// hello, hi, help, bye, thanks, thank you.
    pub fn builtin() -> Self {
        Self::new(
            [
                ("hello", "Hello! How can I help you today?"),
                ("hi", "Hi there! What would you like to talk about?"),
                (
                    "help",
                    "I can chat with you and remember our conversation. \
                     Type 'history' to see what we've talked about, or just keep chatting!",
                ),
                ("bye", "Goodbye! Have a great day!"),
                ("thanks", "You're welcome!"),
                ("thank you", "Happy to help!"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        )
    }

    /// Reply for the first trigger contained in `folded` (already
    /// lowercased), in table order.
    fn lookup(&self, folded: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(keyword, _)| folded.contains(keyword.as_str()))
            .map(|(_, reply)| reply.as_str())
    }
}

/// Stateless reply generator over a fixed table and fallback pool.
///
/// Tables are injected at construction so tests can swap them; nothing here
/// is process-global or mutable.
#[derive(Debug, Clone)]
pub struct Responder {
    table: ResponseTable,
    fallbacks: Vec<String>,
}

impl Responder {
    pub fn new(table: ResponseTable, fallbacks: Vec<String>) -> Self {
        Self { table, fallbacks }
    }

    /// Responder with the built-in table and fallback pool.
    pub fn builtin() -> Self {
        Self::new(
            ResponseTable::builtin(),
            [
                "I'm not sure I understand. Can you rephrase?",
                "Interesting — tell me more.",
                "Hmm, I don't have a good answer for that yet.",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        )
    }

    /// The fallback pool, in order.
    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// Reply for the first keyword found in `input`, if any.
    ///
    /// Matching is case-insensitive substring containment, not word
    /// boundaries: "bye" hits inside "goodbye".
    pub fn keyword_reply(&self, input: &str) -> Option<&str> {
        self.table.lookup(&input.to_lowercase())
    }

    /// Produce a reply for one line of input.
    ///
    /// Empty (after trimming) input gets [`EMPTY_INPUT_REPLY`]; unmatched
    /// input gets a uniform random draw from the fallback pool. The random
    /// draw is the only non-determinism.
    pub fn respond(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return EMPTY_INPUT_REPLY.to_string();
        }

        if let Some(reply) = self.keyword_reply(input) {
            return reply.to_string();
        }

        self.fallbacks
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| EMPTY_INPUT_REPLY.to_string())
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_matches_anywhere() {
        let r = Responder::builtin();
        for input in ["hello", "HELLO there", "oh, hello friend", "saying hello!"] {
            assert_eq!(r.respond(input), "Hello! How can I help you today?");
        }
    }

    #[test]
    fn test_substring_not_word_boundary() {
        let r = Responder::builtin();
        // "bye" inside "goodbye-ish" text still matches the "bye" entry
        assert_eq!(r.respond("goodbyeee"), "Goodbye! Have a great day!");
    }

    #[test]
    fn test_table_order_decides_thanks() {
        let r = Responder::builtin();
        // "thanks" does not occur in this input, so the later "thank you"
        // entry is the first substring match
        assert_eq!(r.respond("thank you so much"), "Happy to help!");
        // with a literal "thanks" the earlier entry wins
        assert_eq!(r.respond("thanks a lot"), "You're welcome!");
    }

    #[test]
    fn test_empty_input_gets_fixed_prompt() {
        let r = Responder::builtin();
        assert_eq!(r.respond(""), EMPTY_INPUT_REPLY);
        assert_eq!(r.respond("   "), EMPTY_INPUT_REPLY);
    }

    #[test]
    fn test_unmatched_input_draws_from_pool() {
        let r = Responder::builtin();
        for _ in 0..20 {
            let reply = r.respond("What time is it?");
            assert!(
                r.fallbacks().iter().any(|f| f == &reply),
                "unexpected reply: {}",
                reply
            );
        }
    }

    #[test]
    fn test_injected_table_is_used() {
        let r = Responder::new(
            ResponseTable::new(vec![("ping".to_string(), "pong".to_string())]),
            vec!["dunno".to_string()],
        );
        assert_eq!(r.respond("ping?"), "pong");
        assert_eq!(r.respond("anything else"), "dunno");
    }
}
