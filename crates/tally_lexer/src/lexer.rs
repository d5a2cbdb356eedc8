//! The lexer instance: bound input, operator configuration, and the
//! reset/run lifecycle.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::lex_error::{ErrorReport, LexError, LexFailure};
use crate::op_trie::{default_trie, OpTrie};
use crate::scanner::Scanner;
use crate::source_buffer::SourceBuffer;
use crate::token::Token;

/// Operator configuration: the process-wide default trie, or an
/// instance-owned custom one built from a supplied set.
#[derive(Clone, Debug, Default)]
enum Operators {
    #[default]
    Default,
    Custom(OpTrie),
}

impl Operators {
    fn trie(&self) -> &OpTrie {
        match self {
            Operators::Default => default_trie(),
            Operators::Custom(trie) => trie,
        }
    }
}

/// A reusable tokenizer over one bound input at a time.
///
/// An instance owns its cursor position, its operator configuration, and
/// a private cache of prepared source buffers, so re-binding a source
/// string seen before skips the buffer copy and null scan. Instances are
/// independent; nothing is shared between them except the default
/// operator trie, which is immutable.
///
/// Correct usage pairs a binding (construction with a source, or
/// [`reset`](Lexer::reset)) with each [`run`](Lexer::run): a second `run`
/// without a `reset` resumes at end of input and yields an empty list.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    source: Option<Rc<SourceBuffer>>,
    operators: Operators,
    /// Resume offset for the next `run`.
    pos: u32,
    /// Prepared buffers keyed by source text. Unbounded but
    /// instance-scoped; see [`clear_cache`](Lexer::clear_cache).
    cache: FxHashMap<String, Rc<SourceBuffer>>,
}

impl Lexer {
    /// An instance with no bound input and the default operator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a source at construction.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.bind(source);
        self
    }

    /// Use a custom operator set instead of [`DEFAULT_OPERATORS`].
    ///
    /// [`DEFAULT_OPERATORS`]: crate::DEFAULT_OPERATORS
    #[must_use]
    pub fn with_operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.operators = Operators::Custom(OpTrie::new(operators));
        self
    }

    /// Start the first run at `pos` instead of the beginning.
    #[must_use]
    pub fn with_position(mut self, pos: u32) -> Self {
        self.pos = pos;
        self
    }

    /// Rebind the input and/or the operator set, rewinding to the start.
    ///
    /// Omitting `source` keeps the currently bound input (for
    /// operator-only changes); omitting `operators` keeps the current
    /// set. Supplying an operator set rebuilds its trie on every call.
    pub fn reset(&mut self, source: Option<&str>, operators: Option<&[&str]>) {
        if let Some(src) = source {
            self.bind(src);
        }
        if let Some(ops) = operators {
            self.operators = Operators::Custom(OpTrie::new(ops));
        }
        self.pos = 0;
    }

    /// Drop all cached source buffers.
    ///
    /// The cache is instance-scoped and otherwise unbounded; long-lived
    /// instances that lex many distinct inputs call this to cap growth.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn bind(&mut self, source: &str) {
        let buffer = self
            .cache
            .entry(source.to_owned())
            .or_insert_with(|| SourceBuffer::shared(source));
        self.source = Some(Rc::clone(buffer));
    }

    /// Tokenize the bound input from the current position through end of
    /// input.
    ///
    /// All-or-nothing: either every token with no lexical errors, or a
    /// failure carrying every diagnostic recorded during the pass.
    /// [`LexFailure::MissingInput`] if no source was ever bound.
    pub fn run(&mut self) -> Result<Vec<Token>, LexFailure> {
        let Some(buffer) = self.source.clone() else {
            return Err(LexFailure::MissingInput);
        };
        let start = self.pos.min(buffer.len());
        let mut cursor = buffer.cursor();
        cursor.advance_n(start);

        let mut scanner = Scanner::new(cursor, self.operators.trie());
        let mut tokens = Vec::new();
        while let Some(token) = scanner.next_token() {
            tokens.push(token);
        }
        self.pos = scanner.pos();
        let mut errors = scanner.into_errors();

        // Interior nulls were recorded once at buffer construction; only
        // the ones this run actually walked over count against it.
        for &pos in buffer.interior_nulls() {
            if pos >= start {
                errors.push(LexError::invalid_character(pos, '\0'));
            }
        }
        errors.sort_by_key(|e| e.pos);

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(LexFailure::Errors(ErrorReport::new(buffer.as_str(), errors)))
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
