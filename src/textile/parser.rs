//! Parser module for the Textile subset
//!
//! The grammar engine takes the significant tokens of one line and reduces them,
//! bottom up through chumsky combinators, to a single LaTeX fragment. It never
//! prints and keeps no state: every call builds a fresh parser, and the line
//! number it receives is only used to label errors.
//!
//! A line that matches no construct, or leaves a phrase marker unclosed, yields a
//! [`SyntaxError`] and no partial output.

pub mod api;
pub(crate) mod combinators;
pub(crate) mod grammar;
#[cfg(test)]
mod tests;

pub use api::{parse_tokens, ParseResult, SyntaxError};
