//! Terminal confirmation for destructive actions.

use std::io::{self, BufRead, Write};

use libdash_app::ports::Confirmation;

/// Asks on stderr and reads the answer from stdin, unless told to assume yes.
pub struct TerminalConfirmation {
    assume_yes: bool,
}

impl TerminalConfirmation {
    #[must_use]
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn ask(prompt: &str) -> io::Result<String> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{prompt} [y/N] ")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer)
    }
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match Self::ask(prompt) {
            Ok(answer) => is_yes(&answer),
            Err(err) => {
                tracing::warn!(error = %err, "unable to read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
