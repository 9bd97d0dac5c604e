//! Interactive prompts for the `generate` command

use std::io::{BufRead, Write};

use tracing::warn;

use crate::models::sanitize_identifier;

/// Line-based prompter over any reader/writer pair.
///
/// Read errors and end of input count as an empty answer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and read one trimmed answer line
    pub fn ask(&mut self, question: &str) -> String {
        if let Err(e) = write!(self.output, "{}", question).and_then(|_| self.output.flush()) {
            warn!("Failed to write prompt: {}", e);
        }

        let mut line = String::new();
        if let Err(e) = self.input.read_line(&mut line) {
            warn!("Failed to read answer: {}", e);
            line.clear();
        }
        line.trim().to_string()
    }

    /// Ask for the database name
    pub fn database_name(&mut self) -> String {
        self.ask("\nEnter database name: ")
    }

    /// Ask for confirmation; only `y` and `yes` (any case) accept
    pub fn confirm(&mut self, question: &str) -> bool {
        let answer = self.ask(&format!("\n{} (y/n): ", question)).to_lowercase();
        matches!(answer.as_str(), "y" | "yes")
    }

    /// Ask for a table name; an empty answer keeps `default`, anything else is sanitized
    pub fn table_name(&mut self, default: &str) -> String {
        let answer = self.ask(&format!(
            "Enter table name (press Enter to use '{}'): ",
            default
        ));
        if answer.is_empty() {
            default.to_string()
        } else {
            sanitize_identifier(&answer)
        }
    }
}
