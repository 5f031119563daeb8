//! Parser combinator functions shared by the grammar rules.

use chumsky::prelude::*;

use crate::textile::latex;
use crate::textile::lexer::{Token, TokenKind};

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Helper: match a token of the given kind, yielding the token
pub(crate) fn kind(expected: TokenKind) -> impl Parser<Token, Token, Error = ParserError> + Clone {
    filter(move |t: &Token| t.kind == expected)
}

/// The `text` terminal: one run of letters, digits and spaces
pub(crate) fn text() -> impl Parser<Token, String, Error = ParserError> + Clone {
    kind(TokenKind::AlphaNumText).map(|t| t.text)
}

/// `marker payload marker`, yielding the payload
pub(crate) fn enclosed<P>(
    marker: TokenKind,
    payload: P,
) -> impl Parser<Token, String, Error = ParserError> + Clone
where
    P: Parser<Token, String, Error = ParserError> + Clone,
{
    payload.delimited_by(kind(marker), kind(marker))
}

/// Strong (`*..*`) or underline (`_.._`) around `payload`
pub(crate) fn emphasis<P>(payload: P) -> impl Parser<Token, String, Error = ParserError> + Clone
where
    P: Parser<Token, String, Error = ParserError> + Clone,
{
    let strong = enclosed(TokenKind::Asterisk, payload.clone()).map(|s| latex::strong(&s));
    let underline = enclosed(TokenKind::Underscore, payload).map(|s| latex::emph(&s));
    strong.or(underline)
}

/// Phrase-modified text, nesting at most one emphasis inside another
///
/// `*_both_*` parses; `*_*deep*_*` does not.
pub(crate) fn phrase_modified() -> impl Parser<Token, String, Error = ParserError> + Clone {
    let nested = emphasis(text());
    emphasis(text().or(nested))
}

/// Payload accepted by superscript, subscript and list items
pub(crate) fn phrase_payload() -> impl Parser<Token, String, Error = ParserError> + Clone {
    text().or(phrase_modified())
}
