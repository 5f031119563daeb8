//! Lexer module for the Textile subset
//!
//! Tokenization is line-local: every call starts from a fresh [`Tokenizer`] and no
//! state survives from one line to the next except the diagnostic line number the
//! caller passes in.
//!
//! Matching is first-match over an explicit priority list (see [`patterns`]),
//! not longest-match.
//! Spaces and tabs between tokens are skipped, but interior and trailing spaces
//! of a text run are part of the text token.
//!
//! Exception: the body of a `<code>...</code>` span on a single line
//! is emitted verbatim as one text token, so code like `x=1` survives untouched.

pub mod lexer_impl;
pub mod patterns;
pub mod tokens;

pub use lexer_impl::{tokenize, LexError, Tokenizer};
pub use patterns::TOKEN_PATTERNS;
pub use tokens::{Token, TokenKind};

use crate::textile::config::RegisteredMark;

/// Tokens the grammar consumes for one line, plus the lexical errors met on the way
pub fn lex_line(
    source: &str,
    line: usize,
    registered_mark: RegisteredMark,
) -> (Vec<Token>, Vec<LexError>) {
    let (mut tokens, errors) = tokenize(source, line, registered_mark);
    tokens.retain(|t| t.kind.is_significant());
    (tokens, errors)
}
