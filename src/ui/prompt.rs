//! Line-based prompts with validation against a fixed vocabulary.

use crate::errors::AppResult;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one trimmed, lowercased answer. `None` at end of input.
    fn read_answer(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Ask until the answer is one of `options` (case-insensitive).
    ///
    /// Returns the matching option, or `None` if input ends first.
    pub fn choose(&mut self, question: &str, options: &[&str]) -> AppResult<Option<String>> {
        loop {
            write!(self.output, "\n{question}\n> ")?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                writeln!(self.output)?;
                return Ok(None);
            };

            if let Some(opt) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
                writeln!(self.output, "Thanks for choosing {opt}!")?;
                return Ok(Some(opt.to_string()));
            }

            writeln!(
                self.output,
                "Sorry! '{answer}' is not an available option. Please try again."
            )?;
        }
    }

    /// Yes/no question; `y`/`n` are accepted too. `None` at end of input.
    pub fn confirm(&mut self, question: &str) -> AppResult<Option<bool>> {
        loop {
            write!(self.output, "\n{question} [yes/no]\n> ")?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                writeln!(self.output)?;
                return Ok(None);
            };

            match answer.as_str() {
                "yes" | "y" => return Ok(Some(true)),
                "no" | "n" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please answer yes or no.")?,
            }
        }
    }
}
