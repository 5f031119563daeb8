//! # textile2latex
//!
//! Translates single lines of a Textile subset into LaTeX fragments.
//!
//! Each line is tokenized and parsed on its own: a header, an emphasised phrase, a
//! footnote, a short ordered list and so on become one LaTeX fragment, and a line
//! that does not reduce to one construct becomes a [`SyntaxError`]. Neither kind of
//! error stops the caller from moving on to the next line.
//!
//! ```text
//! h1. Introduction      ->  \section{Introduction}
//! *_both_*              ->  \textbf{\emph{both}}
//! text(c)               ->  text\textcopyright
//! ```

pub mod textile;

pub use textile::{translate, LineTranslation, ParseResult, SyntaxError, Translator, TranslatorConfig};
