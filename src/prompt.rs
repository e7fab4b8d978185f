//! Prompt, validate, re-prompt.
//!
//! Generic over the input and output streams so sessions can be scripted
//! in tests.

use crate::error::InputClosed;
use crate::filters::{title_case, Choice};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Stream that prompts and reports are written to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until the answer is one of `T`'s variants.
    pub fn choose<T: Choice>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match T::parse_choice(&answer) {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    debug!(kind = T::KIND, value = %err.value, "Rejected input");
                    let options: Vec<String> = T::names().into_iter().map(title_case).collect();
                    writeln!(
                        self.output,
                        "Invalid input! Please choose from: {}",
                        options.join(", ")
                    )?;
                }
            }
        }
    }

    /// Ask a yes/no question until the answer is one of the two.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            match self.ask(prompt)?.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => writeln!(self.output, "Please enter yes or no.")?,
            }
        }
    }

    /// One trimmed, lowercased line. End of input is an [`InputClosed`] error.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_lowercase())
    }
}
