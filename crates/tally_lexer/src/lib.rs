//! Tokenizer for Tally arithmetic expressions.
//!
//! Turns a source string into an ordered list of typed tokens: numeric
//! constants (integer, hex, float, scientific), identifiers, operators,
//! parentheses, and commas. Operators are configurable; multi-character
//! operators are matched greedily through a prefix trie, so a set
//! containing both `=` and `==` tokenizes `"=="` as one token.
//!
//! Lexical errors do not stop the scan: every diagnostic in the input is
//! collected, and [`Lexer::run`] either returns a complete, error-free
//! token list or fails with all of them.
//!
//! ```
//! use tally_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new().with_source("max(2.5e-3, x)");
//! let tokens = lexer.run()?;
//! assert_eq!(tokens[0].kind, TokenKind::Variable);
//! assert_eq!(tokens[2].lexeme, "2.5e-3");
//! # Ok::<(), tally_lexer::LexFailure>(())
//! ```

mod cursor;
mod lex_error;
mod lexer;
mod op_trie;
mod scanner;
mod source_buffer;
mod tables;
mod token;

pub use cursor::Cursor;
pub use lex_error::{ErrorReport, LexError, LexErrorKind, LexFailure};
pub use lexer::Lexer;
pub use op_trie::{OpTrie, DEFAULT_OPERATORS};
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
