//! User decision points the synchronizer cannot resolve on its own.

use std::io::{BufRead, Write};

pub const DELETE_CONFIRMATION: &str = "Delete this job?";

pub trait UserPrompt: Send + Sync {
    /// Blocking yes/no question. Only a `true` answer lets the caller go on.
    /// Async callers run it on the blocking pool.
    fn confirm(&self, message: &str) -> bool;

    /// Immediate notification for failures that have no inline error slot.
    fn notify(&self, message: &str);
}

/// Prompt on the controlling terminal: questions on stderr, answers from stdin.
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl UserPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = std::io::stderr();
        if let Err(e) = write!(stderr, "{} [y/N] ", message).and_then(|_| stderr.flush()) {
            tracing::warn!("Failed to write confirmation prompt: {}", e);
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
