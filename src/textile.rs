//! Main module for the Textile to LaTeX translator

pub mod config;
pub mod latex;
pub mod lexer;
pub mod parser;
pub mod processor;

#[cfg(test)]
pub mod testing;

pub use config::TranslatorConfig;
pub use parser::{ParseResult, SyntaxError};
pub use processor::{LineTranslation, Translator};

/// Translate one line with the default configuration
///
/// Lexical errors are logged and otherwise dropped; use [`Translator`] to get
/// them back.
pub fn translate(line: &str) -> ParseResult {
    Translator::default().translate_line(line, 1).result
}
