//! LaTeX fragment builders
//!
//! Each grammar reduction renders through one of these functions. They only
//! concatenate: payloads are emitted exactly as tokenized, without escaping.

use crate::textile::config::ListWrapping;

/// Sectioning command for heading depth 1..=5
pub fn heading_command(level: u8) -> &'static str {
    match level {
        1 => "section",
        2 => "subsection",
        3 => "subsubsection",
        4 => "paragraph",
        _ => "subparagraph",
    }
}

pub fn heading(level: u8, text: &str) -> String {
    format!("\\{}{{{}}}", heading_command(level), text)
}

fn environment(name: &str, body: &str) -> String {
    format!("\\begin{{{name}}}\n{body}\n\\end{{{name}}}")
}

pub fn blockquote(text: &str) -> String {
    environment("quote", text)
}

pub fn verbatim(text: &str) -> String {
    environment("verbatim", text)
}

pub fn footnote(text: &str) -> String {
    format!("\\footnote{{{}}}", text)
}

pub fn strong(text: &str) -> String {
    format!("\\textbf{{{}}}", text)
}

pub fn emph(text: &str) -> String {
    format!("\\emph{{{}}}", text)
}

pub fn superscript(text: &str) -> String {
    format!("\\textsuperscript{{{}}}", text)
}

pub fn subscript(text: &str) -> String {
    format!("\\textsubscript{{{}}}", text)
}

pub fn quoted(text: &str) -> String {
    format!("``{}''", text)
}

pub fn trademark() -> String {
    "\\texttrademark ".to_string()
}

pub fn copyright(text: &str) -> String {
    format!("{}\\textcopyright ", text)
}

pub fn registered(text: &str) -> String {
    format!("{}\\textregistered ", text)
}

pub fn item(text: &str) -> String {
    format!("\\item {}", text)
}

/// Wrap rendered `\item` lines in `enumerate`
///
/// [`ListWrapping::PerItem`] folds from the right: the last item is wrapped on its
/// own, and every earlier item wraps itself followed by the already wrapped rest.
pub fn enumerate(items: &[String], wrapping: ListWrapping) -> String {
    match wrapping {
        ListWrapping::Outermost => environment("enumerate", &items.join("\n")),
        ListWrapping::PerItem => match items.split_last() {
            Some((last, init)) => init
                .iter()
                .rev()
                .fold(environment("enumerate", last), |rest, item| {
                    environment("enumerate", &format!("{}\n{}", item, rest))
                }),
            None => String::new(),
        },
    }
}
