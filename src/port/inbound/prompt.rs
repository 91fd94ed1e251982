//! Operator input port for the interactive menu.

use crate::error::Result;

/// Source of interactive answers.
///
/// Implementations return [`Error::InputClosed`](crate::error::Error::InputClosed)
/// once no further input can be read.
pub trait Prompt {
    /// Read one line of free text. Surrounding whitespace is trimmed.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Pick one of `items`. Returns `None` when the answer is not a valid choice.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>>;
}
