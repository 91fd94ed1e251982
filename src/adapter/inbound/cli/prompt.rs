//! Prompt implementations for the interactive menu.
//!
//! [`DialoguerPrompt`] drives a real terminal. [`LinePrompt`] reads one answer
//! per line from any reader, which covers piped stdin and tests.

use std::io::{BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::{Error, Result};
use crate::port::inbound::prompt::Prompt;

/// Terminal prompt backed by `dialoguer`.
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for DialoguerPrompt {
    fn text(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }
}

/// Line-oriented prompt over arbitrary reader and writer.
///
/// Menus are printed as a numbered list and answered by number.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompt, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn text(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;
        self.read_answer()
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        let rule = "*".repeat(32);
        writeln!(self.writer, "{rule}")?;
        for (index, item) in items.iter().enumerate() {
            writeln!(self.writer, "  {}. {item}", index + 1)?;
        }
        writeln!(self.writer, "{rule}")?;
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let answer = self.read_answer()?;
        Ok(answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=items.len()).contains(n))
            .map(|n| n - 1))
    }
}
