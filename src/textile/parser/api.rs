//! Public API for the grammar engine.

use chumsky::{Parser, Stream};
use thiserror::Error;

use crate::textile::config::GrammarConfig;
use crate::textile::lexer::{Token, TokenKind};
use crate::textile::parser::combinators::ParserError;
use crate::textile::parser::grammar::textile_content;

/// Outcome of translating one line
pub type ParseResult = Result<String, SyntaxError>;

/// A line whose tokens reduce to no construct
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("line {line}: Syntax error at => '{text}' type => '{found}'")]
    UnexpectedToken {
        line: usize,
        position: usize,
        found: TokenKind,
        text: String,
    },
    #[error("line {line}: Syntax error at EOF")]
    UnexpectedEof { line: usize, position: usize },
}

impl SyntaxError {
    /// Kind of the offending token, `Eof` when input ran out
    pub fn found(&self) -> TokenKind {
        match self {
            SyntaxError::UnexpectedToken { found, .. } => *found,
            SyntaxError::UnexpectedEof { .. } => TokenKind::Eof,
        }
    }

    /// Byte offset in the line where parsing failed
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::UnexpectedEof { position, .. } => *position,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { line, .. } | SyntaxError::UnexpectedEof { line, .. } => {
                *line
            }
        }
    }

    fn from_parser_error(line: usize, error: &ParserError) -> Self {
        match error.found() {
            Some(token) => SyntaxError::UnexpectedToken {
                line,
                position: token.position,
                found: token.kind,
                text: token.text.clone(),
            },
            None => SyntaxError::UnexpectedEof {
                line,
                position: error.span().start,
            },
        }
    }
}

/// Reduce one line's significant tokens to its LaTeX fragment
///
/// `source_len` is the byte length of the line, used as the end-of-input position.
pub fn parse_tokens(
    tokens: Vec<Token>,
    line: usize,
    source_len: usize,
    config: GrammarConfig,
) -> ParseResult {
    let token_count = tokens.len();
    let stream = Stream::from_iter(
        source_len..source_len,
        tokens.into_iter().map(|token| {
            let span = token.span();
            (token, span)
        }),
    );

    let result = textile_content(config).parse(stream).map_err(|errors| {
        errors
            .first()
            .map(|error| SyntaxError::from_parser_error(line, error))
            .unwrap_or(SyntaxError::UnexpectedEof {
                line,
                position: source_len,
            })
    });

    match &result {
        Ok(latex) => log::debug!(
            "line {}: {} tokens -> {} bytes of LaTeX",
            line,
            token_count,
            latex.len()
        ),
        Err(error) => log::debug!("line {}: {} tokens -> {}", line, token_count, error),
    }
    result
}
