//! Helpers shared by the unit tests
//!
//! Grammar tests should go through [`translate_default`] so they exercise the
//! same lexer configuration the CLI uses by default; reach for [`tokens_of`] only
//! when a test drives an individual combinator.

use crate::textile::config::{RegisteredMark, TranslatorConfig};
use crate::textile::lexer::{lex_line, Token};
use crate::textile::parser::ParseResult;
use crate::textile::processor::Translator;

/// Significant tokens of `source`, lexical errors dropped
pub fn tokens_of(source: &str) -> Vec<Token> {
    lex_line(source, 1, RegisteredMark::Verbatim).0
}

/// Translate a single line with the default configuration
pub fn translate_default(source: &str) -> ParseResult {
    Translator::new(TranslatorConfig::default())
        .translate_line(source, 1)
        .result
}

/// Assert that `source` translates to exactly `expected`
#[track_caller]
pub fn assert_translates(source: &str, expected: &str) {
    match translate_default(source) {
        Ok(latex) => assert_eq!(latex, expected, "translating {:?}", source),
        Err(error) => panic!("expected {:?} to translate, got {}", source, error),
    }
}
