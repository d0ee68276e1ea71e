//! Line-oriented prompting with validation loops
//!
//! Every prompt re-asks until it gets usable input. End of input is
//! reported as [`FrontDeskError::InputClosed`].

use crate::error::{FrontDeskError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Reads operator input and writes prompts and messages
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Write an empty line
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Ask until the operator enters an integer
    pub fn read_int(&mut self, prompt: &str) -> Result<i32> {
        loop {
            let line = self.read_trimmed(prompt)?;
            if line.is_empty() {
                self.say("Input cannot be empty. Please enter a number.")?;
                continue;
            }

            match line.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(input = line.as_str(), error = %e, "Rejected numeric input");
                    self.say("Invalid number. Please try again.")?;
                }
            }
        }
    }

    /// Ask until the operator enters a non-empty line, returned trimmed
    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_trimmed(prompt)?;
            if line.is_empty() {
                self.say("Input cannot be empty.")?;
            } else {
                return Ok(line);
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_trimmed(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD so bad input is re-prompted
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(FrontDeskError::InputClosed.into());
        }
        Ok(String::from_utf8_lossy(&bytes).trim().to_string())
    }
}
