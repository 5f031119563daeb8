//! Token definitions for the Textile subset
//!
//! A token is a classified, positioned slice of one input line. Kinds are a closed
//! set; which kind wins at a given position is decided by the ordered pattern table
//! in [`patterns`](super::patterns), not by anything declared here.
use serde::Serialize;
use std::fmt;

/// All token kinds the tokenizer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Plain content: letters, digits and spaces
    AlphaNumText,

    // Phrase markers
    Underscore,
    Asterisk,
    Caret,
    Tilde,
    NumberSign,
    DblQuote,

    // Block signatures
    H1,
    H2,
    H3,
    H4,
    H5,
    Blockquote,
    Footnote,
    CodeOpen,
    CodeClose,

    // Symbols
    Trademark,
    Registered,
    Copyright,

    Newline,
    /// Never produced by the tokenizer; marks "input exhausted" in syntax errors
    Eof,
}

impl TokenKind {
    /// Heading depth for `H1`..`H5`
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            TokenKind::H1 => Some(1),
            TokenKind::H2 => Some(2),
            TokenKind::H3 => Some(3),
            TokenKind::H4 => Some(4),
            TokenKind::H5 => Some(5),
            _ => None,
        }
    }

    /// Check if the grammar ever sees tokens of this kind
    pub fn is_significant(&self) -> bool {
        !matches!(self, TokenKind::Newline | TokenKind::Eof)
    }

    /// Name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::AlphaNumText => "ALPHANUMTEXT",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Caret => "CARET",
            TokenKind::Tilde => "TILDE",
            TokenKind::NumberSign => "NUMBERSIGN",
            TokenKind::DblQuote => "DBLQUOTE",
            TokenKind::H1 => "H1",
            TokenKind::H2 => "H2",
            TokenKind::H3 => "H3",
            TokenKind::H4 => "H4",
            TokenKind::H5 => "H5",
            TokenKind::Blockquote => "BQ",
            TokenKind::Footnote => "FN",
            TokenKind::CodeOpen => "LCODE",
            TokenKind::CodeClose => "RCODE",
            TokenKind::Trademark => "TRADEMARK",
            TokenKind::Registered => "REGISTERED",
            TokenKind::Copyright => "COPYRIGHT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of a line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of `text` within the line
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Byte range covered by this token
    pub fn span(&self) -> std::ops::Range<usize> {
        self.position..self.position + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{:?}>", self.kind, self.text)
    }
}
