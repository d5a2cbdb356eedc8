//! The diagnostic value and report rendering.

use crate::snippet;

/// A message anchored to a 0-based byte offset in the source.
///
/// Diagnostics are plain data; [`render`](Diagnostic::render) needs the
/// source text because the snippet is drawn from it, not stored here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub message: String,
    /// Byte offset the caret points at.
    pub pos: u32,
}

impl Diagnostic {
    /// Create a diagnostic from a message and offset.
    pub fn new(message: impl Into<String>, pos: u32) -> Self {
        Self {
            message: message.into(),
            pos,
        }
    }

    /// Render as message plus the two-line caret snippet.
    pub fn render(&self, source: &str) -> String {
        format!("{}\n{}", self.message, snippet::underline(source, self.pos))
    }
}

/// Render a batch of diagnostics against one source, separated by blank
/// lines, in the order given.
pub fn render_all(diagnostics: &[Diagnostic], source: &str) -> String {
    diagnostics
        .iter()
        .map(|d| d.render(source))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests;
