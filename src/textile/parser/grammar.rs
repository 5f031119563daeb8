//! Line grammar: every line reduces to exactly one `textile_content` alternative.
//!
//! The alternatives are tried in the order listed in [`textile_content`]. Apart
//! from the empty production, each one is recognisable by its first token (the
//! two symbol constructs both start with text and are told apart by the mark that
//! follows), so the order only matters for which error gets reported.

use chumsky::prelude::*;
use chumsky::BoxedParser;

use crate::textile::config::{GrammarConfig, ListWrapping};
use crate::textile::latex;
use crate::textile::lexer::{Token, TokenKind};
use crate::textile::parser::combinators::{
    enclosed, kind, phrase_modified, phrase_payload, text, ParserError,
};

type Rule = BoxedParser<'static, Token, String, ParserError>;

fn headers() -> Rule {
    filter(|t: &Token| t.kind.heading_level().is_some())
        .then(text())
        .map(|(marker, text)| latex::heading(marker.kind.heading_level().unwrap_or(5), &text))
        .boxed()
}

fn dbl_quoted() -> Rule {
    enclosed(TokenKind::DblQuote, text())
        .map(|t| latex::quoted(&t))
        .boxed()
}

fn trademark() -> Rule {
    kind(TokenKind::Trademark).to(latex::trademark()).boxed()
}

/// `text (c)` and `text (r)`
fn marked_text() -> Rule {
    text()
        .then(kind(TokenKind::Copyright).or(kind(TokenKind::Registered)))
        .map(|(text, mark)| match mark.kind {
            TokenKind::Copyright => latex::copyright(&text),
            _ => latex::registered(&text),
        })
        .boxed()
}

fn blockquote() -> Rule {
    kind(TokenKind::Blockquote)
        .ignore_then(text())
        .map(|t| latex::blockquote(&t))
        .boxed()
}

fn footnote() -> Rule {
    kind(TokenKind::Footnote)
        .ignore_then(text())
        .map(|t| latex::footnote(&t))
        .boxed()
}

fn superscript() -> Rule {
    enclosed(TokenKind::Caret, phrase_payload())
        .map(|t| latex::superscript(&t))
        .boxed()
}

fn subscript() -> Rule {
    enclosed(TokenKind::Tilde, phrase_payload())
        .map(|t| latex::subscript(&t))
        .boxed()
}

fn list(wrapping: ListWrapping) -> Rule {
    kind(TokenKind::NumberSign)
        .ignore_then(phrase_payload())
        .map(|t| latex::item(&t))
        .repeated()
        .at_least(1)
        .map(move |items| latex::enumerate(&items, wrapping))
        .boxed()
}

fn code() -> Rule {
    kind(TokenKind::CodeOpen)
        .ignore_then(text())
        .then_ignore(kind(TokenKind::CodeClose))
        .map(|t| latex::verbatim(&t))
        .boxed()
}

fn empty_line() -> Rule {
    end().to(String::new()).boxed()
}

/// Parser for a whole line
pub(crate) fn textile_content(config: GrammarConfig) -> Rule {
    choice((
        headers(),
        phrase_modified().boxed(),
        dbl_quoted(),
        trademark(),
        marked_text(),
        blockquote(),
        footnote(),
        superscript(),
        subscript(),
        list(config.list_wrapping),
        code(),
        empty_line(),
    ))
    .then_ignore(end())
    .boxed()
}
