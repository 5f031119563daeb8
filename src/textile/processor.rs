//! Line processing for Textile sources
//!
//! [`Translator`] is the per-line driver: it threads the diagnostic line number
//! through a fresh tokenizer and grammar run for each line and hands back a
//! [`LineTranslation`] without printing anything. [`process_source`] and
//! [`process_file`] sit on top of it and also provide the token inspection stages
//! (`token-simple`, `token-json`), which show what the tokenizer produced for each
//! line instead of translating it.

use crate::textile::config::TranslatorConfig;
use crate::textile::lexer::{lex_line, tokenize, LexError, Token};
use crate::textile::parser::{parse_tokens, ParseResult};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Everything produced while translating one line
#[derive(Debug, Clone, PartialEq)]
pub struct LineTranslation {
    pub line: usize,
    pub result: ParseResult,
    pub lex_errors: Vec<LexError>,
}

impl LineTranslation {
    /// The LaTeX fragment, if the line parsed
    pub fn output(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    /// User-facing messages, lexical ones first
    pub fn diagnostics(&self) -> Vec<String> {
        let mut messages: Vec<String> = self.lex_errors.iter().map(|e| e.to_string()).collect();
        if let Err(error) = &self.result {
            messages.push(error.to_string());
        }
        messages
    }
}

/// Stateless line translator
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate one line; `line` only labels diagnostics
    pub fn translate_line(&self, source: &str, line: usize) -> LineTranslation {
        let (tokens, lex_errors) = lex_line(source, line, self.config.lexer.registered_mark);
        for error in &lex_errors {
            log::debug!("{}", error);
        }
        let result = parse_tokens(tokens, line, source.len(), self.config.grammar);
        LineTranslation {
            line,
            result,
            lex_errors,
        }
    }

    /// Translate lines in order, numbering them from 1
    pub fn translate_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = LineTranslation> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        lines
            .into_iter()
            .enumerate()
            .map(move |(index, source)| self.translate_line(source, index + 1))
    }
}

/// What to emit for each line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The translated LaTeX fragment
    #[default]
    Latex,
    /// Tokens rendered as `<KIND:"text">`
    TokenSimple,
    /// Tokens as a JSON array
    TokenJson,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["latex", "token-simple", "token-json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Latex => "latex",
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latex" => Ok(OutputFormat::Latex),
            "token-simple" => Ok(OutputFormat::TokenSimple),
            "token-json" => Ok(OutputFormat::TokenJson),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid format '{0}' (expected latex, token-simple or token-json)")]
    InvalidFormat(String),
    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

/// One line of processed output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedLine {
    pub line: usize,
    /// What goes to the output stream; `None` when the line failed to parse
    pub output: Option<String>,
    pub diagnostics: Vec<String>,
}

/// Process every line of `source` in the given format
pub fn process_source(
    source: &str,
    format: OutputFormat,
    translator: &Translator,
) -> Result<Vec<ProcessedLine>, ProcessingError> {
    match format {
        OutputFormat::Latex => Ok(translator
            .translate_lines(source.lines())
            .map(|translation| ProcessedLine {
                line: translation.line,
                output: translation.output().map(str::to_string),
                diagnostics: translation.diagnostics(),
            })
            .collect()),
        OutputFormat::TokenSimple | OutputFormat::TokenJson => source
            .lines()
            .enumerate()
            .map(|(index, text)| {
                let line = index + 1;
                let (tokens, errors) =
                    tokenize(text, line, translator.config().lexer.registered_mark);
                Ok(ProcessedLine {
                    line,
                    output: Some(format_tokens(&tokens, format)?),
                    diagnostics: errors.iter().map(|e| e.to_string()).collect(),
                })
            })
            .collect(),
    }
}

/// Read and process a file
pub fn process_file<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    translator: &Translator,
) -> Result<Vec<ProcessedLine>, ProcessingError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ProcessingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("processing {} as {}", path.display(), format);
    process_source(&content, format, translator)
}

fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::TokenJson => Ok(serde_json::to_string(tokens)?),
        _ => Ok(tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")),
    }
}
