//! Line-oriented prompt/print helpers for the interactive menu.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize, style};
use thiserror::Error;

/// Why a prompt produced no usable answer.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The line was read but is not UTF-8; carries a lossy rendering of it.
    #[error("input must be valid UTF-8, got {0:?}")]
    NotUtf8(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A prompt/answer channel over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    fn paint(&self, content: impl Display, color: Color) -> String {
        if self.color {
            style(content).with(color).to_string()
        } else {
            content.to_string()
        }
    }

    /// Print `text` and read one line. `None` once the input is exhausted.
    ///
    /// A line that is not UTF-8 is consumed whole and reported as
    /// [`PromptError::NotUtf8`], so the next prompt starts on the next line.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, PromptError> {
        let text = self.paint(text, Color::Cyan);
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        String::from_utf8(line)
            .map(Some)
            .map_err(|e| PromptError::NotUtf8(String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        let text = self.paint(text, Color::Green);
        writeln!(self.output, "{text}")
    }

    pub fn notice(&mut self, text: impl Display) -> io::Result<()> {
        let text = self.paint(text, Color::Yellow);
        writeln!(self.output, "{text}")
    }

    pub fn error(&mut self, err: impl Display) -> io::Result<()> {
        let text = self.paint(format!("Error: {err}"), Color::Red);
        writeln!(self.output, "{text}")
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
