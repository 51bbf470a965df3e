//! # Console
//!
//! Prompt helpers shared by every screen, generic over the reader and writer
//! so tests can drive the menu from a string.
//!
//! ## Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [A] First option           options are lettered A, B, ... Z, AA, AB    │
//! │  [B] Second option          answers are case-insensitive                │
//! │  Select an option: q        'q' backs out, returns Ok(None)             │
//! │                             end of input behaves like 'q'               │
//! │                                                                         │
//! │  after repeated bad answers:  Enter 'q' to go back                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{debug, warn};

use stockroom_core::validation::ValidationResult;

use crate::error::AppResult;

/// Printed when the user keeps answering wrong.
pub const BACK_HINT: &str = "Enter 'q' to go back";

/// Printed when a line is not valid UTF-8.
pub const NOT_TEXT: &str = "Input must be valid text";

/// Letter key for the option at `index`: A..Z, then AA, AB, ...
pub fn option_key(index: usize) -> String {
    let mut key = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        key.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    key.reverse();
    String::from_utf8_lossy(&key).into_owned()
}

fn is_back(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("q")
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Gives the writer back, used by tests to inspect the transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints `prompt` and reads one line, `None` at end of input.
    ///
    /// A line that is not UTF-8 is consumed and the prompt repeated.
    pub fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut bytes = Vec::new();
            if self.input.read_until(b'\n', &mut bytes)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                return Ok(None);
            }

            match String::from_utf8(bytes) {
                Ok(line) => return Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
                Err(e) => {
                    warn!(len = e.as_bytes().len(), "Rejected non UTF-8 input");
                    self.say(NOT_TEXT)?;
                }
            }
        }
    }

    /// Prints `[A] first`, `[B] second`, ...
    pub fn list<S: AsRef<str>>(&mut self, options: &[S]) -> AppResult<()> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "[{}] {}", option_key(i), option.as_ref())?;
        }
        Ok(())
    }

    /// Lists `options` and returns the index of the one picked.
    ///
    /// Keeps asking until the answer is one of the keys. `Ok(None)` when the
    /// user enters `q` or input ends.
    pub fn choose<S: AsRef<str>>(&mut self, options: &[S]) -> AppResult<Option<usize>> {
        self.list(options)?;
        let mut prompt = "Select an option: ";
        let mut retries = 0;

        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if is_back(&answer) {
                warn!("User backed out of option list");
                return Ok(None);
            }

            let answer = answer.trim().to_uppercase();
            if let Some(index) = (0..options.len()).find(|&i| option_key(i) == answer) {
                return Ok(Some(index));
            }

            retries += 1;
            debug!(retries, %answer, "Answer not in options");
            if retries > 1 {
                self.say(format!("You entered : {answer}"))?;
                self.say(BACK_HINT)?;
                self.blank()?;
                self.say("These are your options")?;
                self.list(options)?;
            }
            prompt = "Select a valid option: ";
        }
    }

    /// Asks until `validate` accepts the trimmed answer.
    ///
    /// Each rejection prints the validation message. `Ok(None)` when the
    /// user enters `q` or input ends.
    pub fn prompt<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> ValidationResult<T>,
    ) -> AppResult<Option<T>> {
        let mut retries = 0;
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if is_back(&answer) {
                warn!(%prompt, "User backed out of prompt");
                return Ok(None);
            }

            match validate(answer.trim()) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    self.say(&e)?;
                }
            }

            retries += 1;
            if retries > 2 {
                self.say(BACK_HINT)?;
                self.blank()?;
            }
        }
    }
}
