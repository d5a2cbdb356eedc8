//! Lexical error types.
//!
//! Errors stay structured (kind + position) while the scan runs; they are
//! only formatted into message + caret snippets at the boundary, in the
//! `Display` of [`ErrorReport`].

use std::fmt;

use tally_diagnostic::{render_all, Diagnostic};
use thiserror::Error;

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// No hex digit after the `0x`/`0X` prefix.
    #[error("expected a number after '{marker}'")]
    UnterminatedHexLiteral { marker: char },
    /// No digit after the decimal point.
    #[error("expected a number after the decimal point")]
    UnterminatedFloatLiteral,
    /// No digit after the exponent marker and optional sign.
    #[error("expected a number after the exponent sign")]
    UnterminatedExponent,
    /// A character matching no lexical class: not whitespace, not a
    /// parenthesis or comma, not an identifier start, not a configured
    /// operator prefix, not a number start.
    #[error("invalid character '{}'", .ch.escape_default())]
    InvalidCharacter { ch: char },
}

/// A positioned lexical error.
///
/// Recording one never aborts the scan: the scanner continues past the
/// malformed segment so a single run surfaces every diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 0-based byte offset the diagnostic points at.
    pub pos: u32,
}

impl LexError {
    #[cold]
    pub fn unterminated_hex(pos: u32, marker: char) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedHexLiteral { marker },
            pos,
        }
    }

    #[cold]
    pub fn unterminated_float(pos: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedFloatLiteral,
            pos,
        }
    }

    #[cold]
    pub fn unterminated_exponent(pos: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedExponent,
            pos,
        }
    }

    #[cold]
    pub fn invalid_character(pos: u32, ch: char) -> Self {
        Self {
            kind: LexErrorKind::InvalidCharacter { ch },
            pos,
        }
    }

    /// The boundary form: message plus anchor for snippet rendering.
    pub fn to_diagnostic(self) -> Diagnostic {
        Diagnostic::new(self.kind.to_string(), self.pos)
    }
}

/// Every diagnostic from one failed run, with the source they point into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    source: String,
    errors: Vec<LexError>,
}

impl ErrorReport {
    pub(crate) fn new(source: impl Into<String>, errors: Vec<LexError>) -> Self {
        debug_assert!(!errors.is_empty(), "a report needs at least one error");
        Self {
            source: source.into(),
            errors,
        }
    }

    /// The collected errors, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// The source text the errors point into.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diagnostics: Vec<Diagnostic> =
            self.errors.iter().map(|e| e.to_diagnostic()).collect();
        write!(f, "{}", render_all(&diagnostics, &self.source))
    }
}

/// Why a [`run`](crate::Lexer::run) failed.
///
/// The run contract is all-or-nothing: a complete error-free token list,
/// or one of these carrying every diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexFailure {
    /// `run` was invoked before any source was bound.
    #[error("no input bound; call reset() with a source before run()")]
    MissingInput,
    /// One or more lexical errors were recorded during the run.
    #[error("{0}")]
    Errors(ErrorReport),
}

#[cfg(test)]
mod tests;
