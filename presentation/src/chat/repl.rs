//! REPL (Read-Eval-Print Loop) for the interactive chat

use patter_application::{ChatTurnUseCase, TranscriptStore};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
pub struct ChatRepl<S: TranscriptStore> {
    use_case: ChatTurnUseCase<S>,
    show_banner: bool,
}

impl<S: TranscriptStore> ChatRepl<S> {
    /// Create a new ChatRepl around a turn use case.
    pub fn new(use_case: ChatTurnUseCase<S>) -> Self {
        Self {
            use_case,
            show_banner: true,
        }
    }

    /// Set whether to print the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Run the interactive loop until an exit keyword, Ctrl-C, or EOF.
    ///
    /// Every ending prints the farewell exactly once. Interrupt and
    /// end-of-input are normal shutdown paths, not faults: the store has
    /// already persisted each mutation, so there is nothing left to save.
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if self.show_banner {
            self.print_welcome();
        }

        loop {
            match rl.readline("You: ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.trim());
                    }

                    let outcome = self.use_case.handle_line(&line);
                    Self::print_reply(outcome.text());
                    if outcome.is_terminal() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    Self::print_reply(&self.use_case.farewell());
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Print one bot turn: "Bot: <text>" followed by a blank line.
    fn print_reply(text: &str) {
        println!("Bot: {}\n", text);
    }

    fn print_welcome(&self) {
        println!();
        println!("Patter — type 'history' to see your chat, 'exit' to leave");
        match self.use_case.store().save_path() {
            Some(path) => println!("History is saved to {}", path.display()),
            None => println!("History is not saved to disk"),
        }
        println!();
    }
}
