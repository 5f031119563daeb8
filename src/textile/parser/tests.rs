use crate::textile::config::{ListWrapping, RegisteredMark, TranslatorConfig};
use crate::textile::lexer::TokenKind;
use crate::textile::parser::SyntaxError;
use crate::textile::processor::Translator;
use crate::textile::testing::{assert_translates, translate_default};

#[test]
fn test_headers() {
    assert_translates("h1. Title", "\\section{Title}");
    assert_translates("h2. Title", "\\subsection{Title}");
    assert_translates("h3. Title", "\\subsubsection{Title}");
    assert_translates("h4. Title", "\\paragraph{Title}");
    assert_translates("h5. Title", "\\subparagraph{Title}");
}

#[test]
fn test_header_text_keeps_inner_spaces() {
    assert_translates("h2. A longer title 2", "\\subsection{A longer title 2}");
}

#[test]
fn test_phrases() {
    assert_translates("*bold*", "\\textbf{bold}");
    assert_translates("_em_", "\\emph{em}");
    assert_translates("^sup^", "\\textsuperscript{sup}");
    assert_translates("~sub~", "\\textsubscript{sub}");
}

#[test]
fn test_single_level_nesting() {
    assert_translates("*_both_*", "\\textbf{\\emph{both}}");
    assert_translates("^*up*^", "\\textsuperscript{\\textbf{up}}");
    assert_translates("~_*x*_~", "\\textsubscript{\\emph{\\textbf{x}}}");
}

#[test]
fn test_nesting_stops_after_one_layer() {
    let error = translate_default("*_*deep*_*").unwrap_err();
    assert_eq!(error.found(), TokenKind::Asterisk);
    assert_eq!(error.position(), 2);
}

#[test]
fn test_super_and_subscript_do_not_nest_in_emphasis() {
    assert!(translate_default("*^x^*").is_err());
}

#[test]
fn test_quoted_text() {
    assert_translates("\"quoted\"", "``quoted''");
}

#[test]
fn test_blocks() {
    assert_translates("bq. text", "\\begin{quote}\ntext\n\\end{quote}");
    assert_translates("fn1. note", "\\footnote{note}");
    assert_translates("fn42. note", "\\footnote{note}");
}

#[test]
fn test_code_keeps_body_verbatim() {
    assert_translates("<code>x=1</code>", "\\begin{verbatim}\nx=1\n\\end{verbatim}");
    assert_translates(
        "<code>*not bold* (c)</code>",
        "\\begin{verbatim}\n*not bold* (c)\n\\end{verbatim}",
    );
}

#[test]
fn test_code_body_spaces() {
    assert_translates("<code> x=1 </code>", "\\begin{verbatim}\n x=1 \n\\end{verbatim}");
    let error = translate_default("<code>  </code>").unwrap_err();
    assert_eq!(error.found(), TokenKind::CodeClose);
    assert_eq!(error.position(), 8);
}

#[test]
fn test_unclosed_code_is_an_error() {
    let error = translate_default("<code>x").unwrap_err();
    assert_eq!(error.found(), TokenKind::Eof);
}

#[test]
fn test_trademark_case_combinations() {
    for mark in ["(tm)", "(TM)", "(tM)", "(Tm)"] {
        assert_translates(mark, "\\texttrademark ");
    }
}

#[test]
fn test_copyright() {
    assert_translates("text(c)", "text\\textcopyright ");
    assert_translates("Acme 2024(C)", "Acme 2024\\textcopyright ");
}

#[test]
fn test_copyright_needs_leading_text() {
    assert!(translate_default("(c)").is_err());
}

// The registered mark is only recognised in its historical `(R])` spelling unless
// the corrected pattern is configured. Its reduction mirrors the copyright one.
#[test]
fn test_registered_mark_verbatim_pattern() {
    assert_translates("Acme(R])", "Acme\\textregistered ");
    assert_translates("Acme(r])", "Acme\\textregistered ");
    assert!(translate_default("Acme(r)").is_err());
    assert!(translate_default("Acme(R)").is_err());
}

#[test]
fn test_registered_mark_corrected_pattern() {
    let mut config = TranslatorConfig::default();
    config.lexer.registered_mark = RegisteredMark::Corrected;
    let translator = Translator::new(config);

    assert_eq!(
        translator.translate_line("Acme(R)", 1).output(),
        Some("Acme\\textregistered ")
    );
    assert!(translator.translate_line("Acme(R])", 1).result.is_err());
}

#[test]
fn test_single_item_list() {
    assert_translates("# item", "\\begin{enumerate}\n\\item item\n\\end{enumerate}");
    assert_translates(
        "## *bold item*",
        "\\begin{enumerate}\n\\item \\textbf{bold item}\n\\end{enumerate}",
    );
}

// Multi-item lists re-open an enumerate environment for every item by default,
// so the second item ends up nested inside the first.
#[test]
fn test_list_wrapping_per_item() {
    assert_translates(
        "# one # two # three",
        "\\begin{enumerate}\n\\item one \n\
         \\begin{enumerate}\n\\item two \n\
         \\begin{enumerate}\n\\item three\n\\end{enumerate}\n\
         \\end{enumerate}\n\
         \\end{enumerate}",
    );
}

#[test]
fn test_list_wrapping_outermost() {
    let mut config = TranslatorConfig::default();
    config.grammar.list_wrapping = ListWrapping::Outermost;
    let translator = Translator::new(config);

    assert_eq!(
        translator.translate_line("# one # two # three", 1).output(),
        Some("\\begin{enumerate}\n\\item one \n\\item two \n\\item three\n\\end{enumerate}")
    );
}

#[test]
fn test_empty_line() {
    assert_translates("", "");
    assert_translates("   \t ", "");
}

#[test]
fn test_unmatched_marker() {
    assert_eq!(
        translate_default("*bold"),
        Err(SyntaxError::UnexpectedEof {
            line: 1,
            position: 5
        })
    );
}

#[test]
fn test_mismatched_markers() {
    assert_eq!(
        translate_default("*bold_"),
        Err(SyntaxError::UnexpectedToken {
            line: 1,
            position: 5,
            found: TokenKind::Underscore,
            text: "_".to_string(),
        })
    );
}

#[test]
fn test_stray_closing_code_tag() {
    let error = translate_default("</code>").unwrap_err();
    assert_eq!(error.found(), TokenKind::CodeClose);
    assert_eq!(
        error.to_string(),
        "line 1: Syntax error at => '</code>' type => 'RCODE'"
    );
}

#[test]
fn test_syntax_error_messages() {
    let eof = translate_default("_em").unwrap_err();
    assert_eq!(eof.to_string(), "line 1: Syntax error at EOF");
    assert_eq!(eof.line(), 1);
}
