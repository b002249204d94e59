//! Line-oriented terminal I/O
//!
//! Wraps an input reader and output writer so command handlers and the
//! interactive loop can run against stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::ExpenseResult;

/// Console input and output
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is
    pub fn print(&mut self, text: &str) -> ExpenseResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a line of text
    pub fn println(&mut self, text: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show a prompt and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        self.print(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Ask a yes/no question; only `y` or `yes` counts as yes
    pub fn confirm(&mut self, prompt: &str) -> ExpenseResult<bool> {
        Ok(self
            .read_line(prompt)?
            .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}
