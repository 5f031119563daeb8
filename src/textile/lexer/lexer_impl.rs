//! Implementation of the line tokenizer
//!
//! [`Tokenizer`] walks one line with the ordered pattern table and yields tokens
//! lazily. Characters that no pattern accepts come out as
//! [`LexError::IllegalCharacter`]; the tokenizer skips exactly that one character
//! and carries on, so a caller that ignores the errors still sees every token of
//! the line.

use crate::textile::config::RegisteredMark;
use crate::textile::lexer::patterns::{first_match, pattern_table, TokenPattern, CODE_CLOSE, IGNORED};
use crate::textile::lexer::tokens::{Token, TokenKind};
use thiserror::Error;

/// Lexical errors; all of them are recoverable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("line {line}: Illegal character => '{character}'")]
    IllegalCharacter {
        character: char,
        position: usize,
        line: usize,
    },
}

/// Lazy tokenizer over a single line
pub struct Tokenizer<'a> {
    source: &'a str,
    cursor: usize,
    line: usize,
    table: &'static [TokenPattern],
    /// End of a pending `<code>` body to emit verbatim
    verbatim_end: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    /// Tokenize `source`, reporting diagnostics against `line`
    pub fn new(source: &'a str, line: usize, registered_mark: RegisteredMark) -> Self {
        Self {
            source,
            cursor: 0,
            line,
            table: pattern_table(registered_mark),
            verbatim_end: None,
        }
    }

    /// Current diagnostic line, advanced by embedded newlines
    pub fn line(&self) -> usize {
        self.line
    }

    fn skip_ignored(&mut self) {
        let rest = &self.source[self.cursor..];
        let trimmed = rest.trim_start_matches(IGNORED);
        self.cursor += rest.len() - trimmed.len();
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.cursor;
        self.cursor += len;
        Token::new(kind, &self.source[start..self.cursor], start)
    }

    /// A code body runs up to the first closing tag on the line
    ///
    /// Blank bodies are not verbatim; the ignored whitespace is skipped as usual.
    fn find_code_body_end(&self) -> Option<usize> {
        let rest = &self.source[self.cursor..];
        rest.find(CODE_CLOSE)
            .filter(|&offset| !rest[..offset].trim_matches(IGNORED).is_empty())
            .map(|offset| self.cursor + offset)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(end) = self.verbatim_end.take() {
            let token = self.emit(TokenKind::AlphaNumText, end - self.cursor);
            log::trace!("line {}: verbatim {}", self.line, token);
            return Some(Ok(token));
        }

        self.skip_ignored();
        let rest = &self.source[self.cursor..];
        let ch = rest.chars().next()?;

        match first_match(self.table, rest) {
            Some((kind, len)) => {
                let token = self.emit(kind, len);
                match kind {
                    TokenKind::Newline => self.line += token.text.len(),
                    TokenKind::CodeOpen => self.verbatim_end = self.find_code_body_end(),
                    _ => {}
                }
                log::trace!("line {}: {}", self.line, token);
                Some(Ok(token))
            }
            None => {
                let position = self.cursor;
                self.cursor += ch.len_utf8();
                Some(Err(LexError::IllegalCharacter {
                    character: ch,
                    position,
                    line: self.line,
                }))
            }
        }
    }
}

/// Tokenize a line, splitting tokens from lexical errors
pub fn tokenize(
    source: &str,
    line: usize,
    registered_mark: RegisteredMark,
) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for result in Tokenizer::new(source, line, registered_mark) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }
    (tokens, errors)
}
