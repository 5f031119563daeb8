//! Ordered token pattern table
//!
//! At each position the patterns are tried top to bottom and the first one that
//! matches wins, even if a later pattern would match a longer slice. The order
//! below is the lexical grammar; changing it changes what the tokenizer accepts.
//!
//! The symbol patterns keep their bracketed single-character alternations as
//! written: `[T|t]` is a class of `T`, `|` and `t`, so `(Tm)` and `(||)` are both
//! trademarks. The registered pattern is `(` + `[R|r]` + a literal `]` + `)` and
//! only matches inputs like `(R])`; [`RegisteredMark::Corrected`] swaps in the
//! `(r)` form instead.

use crate::textile::config::RegisteredMark;
use crate::textile::lexer::tokens::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

const REGISTERED_VERBATIM: &str = r"\([R|r]\]\)";
const REGISTERED_CORRECTED: &str = r"\([R|r]\)";

/// Token patterns in match priority order
pub const TOKEN_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::Trademark, r"\([T|t][M|m]\)"),
    (TokenKind::Copyright, r"\([C|c]\)"),
    (TokenKind::Registered, REGISTERED_VERBATIM),
    (TokenKind::H1, r"h1\. "),
    (TokenKind::H2, r"h2\. "),
    (TokenKind::H3, r"h3\. "),
    (TokenKind::H4, r"h4\. "),
    (TokenKind::H5, r"h5\. "),
    (TokenKind::Blockquote, r"bq\. "),
    (TokenKind::Footnote, r"fn[0-9]+\. "),
    (TokenKind::CodeOpen, r"<code>"),
    (TokenKind::CodeClose, r"</code>"),
    (TokenKind::DblQuote, r#"""#),
    (TokenKind::Underscore, r"_"),
    (TokenKind::NumberSign, r"#+ "),
    (TokenKind::Asterisk, r"\*"),
    (TokenKind::Caret, r"\^"),
    (TokenKind::Tilde, r"~"),
    (TokenKind::Newline, r"\n+"),
    (TokenKind::AlphaNumText, r"[a-zA-Z0-9 ]+"),
];

/// Characters skipped between tokens
pub const IGNORED: &[char] = &[' ', '\t'];

/// Closing tag searched for after a `<code>` token
pub const CODE_CLOSE: &str = "</code>";

/// One compiled entry of the table, anchored at the scan position
#[derive(Debug)]
pub struct TokenPattern {
    pub kind: TokenKind,
    regex: Regex,
}

impl TokenPattern {
    /// Length in bytes of the match at the start of `rest`, if any
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex.find(rest).map(|m| m.end())
    }
}

static VERBATIM_TABLE: Lazy<Vec<TokenPattern>> =
    Lazy::new(|| compile_table(RegisteredMark::Verbatim));

static CORRECTED_TABLE: Lazy<Vec<TokenPattern>> =
    Lazy::new(|| compile_table(RegisteredMark::Corrected));

fn compile_table(mark: RegisteredMark) -> Vec<TokenPattern> {
    TOKEN_PATTERNS
        .iter()
        .map(|&(kind, pattern)| {
            let pattern = match (kind, mark) {
                (TokenKind::Registered, RegisteredMark::Corrected) => REGISTERED_CORRECTED,
                _ => pattern,
            };
            TokenPattern {
                kind,
                regex: Regex::new(&format!("^(?:{})", pattern)).expect("token pattern compiles"),
            }
        })
        .collect()
}

/// The compiled table for the given registered-mark mode
pub fn pattern_table(mark: RegisteredMark) -> &'static [TokenPattern] {
    match mark {
        RegisteredMark::Verbatim => &VERBATIM_TABLE,
        RegisteredMark::Corrected => &CORRECTED_TABLE,
    }
}

/// First pattern in table order matching at the start of `rest`
pub fn first_match(table: &[TokenPattern], rest: &str) -> Option<(TokenKind, usize)> {
    table
        .iter()
        .find_map(|pattern| pattern.match_len(rest).map(|len| (pattern.kind, len)))
}
