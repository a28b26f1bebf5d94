//! Classification of operator input

/// Keywords that end the session.
pub const EXIT_KEYWORDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

/// What one line of operator input means to the session loop.
///
/// Classification is input-side only: a *reply* is never inspected for
/// control keywords, so free-text responses cannot steer the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty or whitespace-only line.
    Blank,
    /// One of the exit keywords; the session is over.
    Exit,
    /// Show the conversation transcript.
    History,
    /// Wipe the conversation transcript.
    Clear,
    /// Ordinary chat input (trimmed).
    Say(String),
}

impl Command {
    /// Classify a raw line of input.
    ///
    /// The line is trimmed and control words are matched case-insensitively
    /// against the *whole* line — "exit" quits, "please exit" is chat.
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Blank;
        }

        let folded = trimmed.to_lowercase();
        if EXIT_KEYWORDS.contains(&folded.as_str()) {
            return Command::Exit;
        }
        match folded.as_str() {
            "history" => Command::History,
            "clear" => Command::Clear,
            _ => Command::Say(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(Command::classify(""), Command::Blank);
        assert_eq!(Command::classify("   \t "), Command::Blank);
    }

    #[test]
    fn test_exit_keywords() {
        for word in ["exit", "quit", "bye", "goodbye"] {
            assert_eq!(Command::classify(word), Command::Exit, "{}", word);
        }
        assert_eq!(Command::classify("  EXIT  "), Command::Exit);
        assert_eq!(Command::classify("Goodbye"), Command::Exit);
    }

    #[test]
    fn test_exit_requires_whole_line() {
        // "bye" embedded in chat is chat, not an exit
        assert_eq!(
            Command::classify("maybe later"),
            Command::Say("maybe later".to_string())
        );
    }

    #[test]
    fn test_history_and_clear() {
        assert_eq!(Command::classify("history"), Command::History);
        assert_eq!(Command::classify("History "), Command::History);
        assert_eq!(Command::classify("CLEAR"), Command::Clear);
    }

    #[test]
    fn test_say_preserves_trimmed_text() {
        assert_eq!(
            Command::classify("  hello there  "),
            Command::Say("hello there".to_string())
        );
    }
}
