//! Hand-written scanner: the dispatch loop and the sub-lexers.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! one [`Token`] per call. Errors are recorded, never thrown: a malformed
//! numeric literal or a stray character adds a diagnostic and scanning
//! continues, so one pass over the input surfaces every problem.
//!
//! Dispatch order decides ambiguities: parentheses and commas before
//! operators (a custom set containing `"("` cannot shadow grouping), and
//! operators before numbers (a leading `-` is an operator, `-5` is two
//! tokens). Every iteration advances the cursor by at least one byte, so
//! no input can loop forever.

use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::op_trie::OpTrie;
use crate::tables;
use crate::token::Token;

/// Single-pass tokenizer over one bound input.
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    operators: &'a OpTrie,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>, operators: &'a OpTrie) -> Self {
        Self {
            cursor,
            operators,
            errors: Vec::new(),
        }
    }

    /// Current byte offset; after the scan this is where a later run
    /// would resume.
    pub(crate) fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Everything recorded during the scan, in source order.
    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Produce the next token, or `None` at end of input.
    ///
    /// Whitespace, interior nulls, and invalid characters produce no
    /// token; the loop advances past them and keeps going.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        loop {
            let start = self.cursor.pos();
            let b = self.cursor.current();
            match b {
                0 => {
                    if self.cursor.is_eof() {
                        return None;
                    }
                    // Interior null: the source buffer already reported it.
                    self.cursor.advance();
                }
                b if tables::is_whitespace(b) => {
                    self.cursor.eat_while(tables::is_whitespace);
                }
                b if tables::is_paren(b) => {
                    self.cursor.advance();
                    return Some(if b == b'(' {
                        Token::left_paren(start)
                    } else {
                        Token::right_paren(start)
                    });
                }
                b if tables::is_ident_start(b) => {
                    return Some(self.identifier(start));
                }
                b',' => {
                    self.cursor.advance();
                    return Some(Token::comma(start));
                }
                _ => {
                    if let Some(op) = self.operators.longest_match(&self.cursor) {
                        #[allow(
                            clippy::cast_possible_truncation,
                            reason = "operator length is bounded by the configured set"
                        )]
                        self.cursor.advance_n(op.len() as u32);
                        return Some(Token::operator(op, start));
                    }
                    if tables::is_number_start(b, self.cursor.peek()) {
                        return Some(self.number(start));
                    }
                    self.invalid_character(start);
                }
            }
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.advance(); // start byte already classified
        self.cursor.eat_while(tables::is_ident_continue);
        Token::variable(self.cursor.slice_from(start), start)
    }

    // ─── Numeric literals ───────────────────────────────────────────────

    /// One literal: `Start -> {Hex, Integer} -> Float -> Scientific`.
    ///
    /// Missing-digit errors are recorded with the position one past the
    /// construct that demanded them, and the literal keeps its zero-digit
    /// tail; the token lexeme is the exact source span either way.
    fn number(&mut self, start: u32) -> Token {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'.' {
            // Leading-dot float; the dispatch lookahead guaranteed a digit.
            self.cursor.eat_while(tables::is_digit);
            if tables::is_exponent_marker(self.cursor.current()) {
                self.exponent();
            }
        } else if first == b'0' && tables::is_hex_marker(self.cursor.current()) {
            self.hex();
        } else {
            self.cursor.eat_while(tables::is_digit);
            if self.cursor.current() == b'.' {
                self.fraction();
            } else if tables::is_exponent_marker(self.cursor.current()) {
                self.exponent();
            }
        }

        Token::constant(self.cursor.slice_from(start), start)
    }

    fn hex(&mut self) {
        let marker = char::from(self.cursor.current());
        self.cursor.advance(); // 'x' | 'X'
        if !tables::is_hex_digit(self.cursor.current()) {
            self.errors
                .push(LexError::unterminated_hex(self.cursor.pos(), marker));
        }
        self.cursor.eat_while(tables::is_hex_digit);
    }

    fn fraction(&mut self) {
        self.cursor.advance(); // the '.'
        if !tables::is_digit(self.cursor.current()) {
            self.errors
                .push(LexError::unterminated_float(self.cursor.pos()));
        }
        self.cursor.eat_while(tables::is_digit);
        if tables::is_exponent_marker(self.cursor.current()) {
            self.exponent();
        }
    }

    fn exponent(&mut self) {
        self.cursor.advance(); // 'e' | 'E'
        if tables::is_sign(self.cursor.current()) {
            self.cursor.advance();
        }
        if !tables::is_digit(self.cursor.current()) {
            self.errors
                .push(LexError::unterminated_exponent(self.cursor.pos()));
        }
        self.cursor.eat_while(tables::is_digit);
    }

    // ─── Invalid characters ─────────────────────────────────────────────

    /// Record the offending character and step past the whole thing, so a
    /// multi-byte character yields one diagnostic, not one per byte.
    fn invalid_character(&mut self, start: u32) {
        let ch = self
            .cursor
            .current_char()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.errors.push(LexError::invalid_character(start, ch));
        self.cursor.advance_char();
    }
}
