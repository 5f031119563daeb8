//! Whole-file translation of the sample documents in `docs/samples`

use std::path::PathBuf;
use textile2latex::textile::processor::{process_file, OutputFormat, ProcessedLine};
use textile2latex::Translator;

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs/samples")
        .join(name)
}

fn process_sample(name: &str) -> Vec<ProcessedLine> {
    process_file(sample(name), OutputFormat::Latex, &Translator::default())
        .unwrap_or_else(|e| panic!("failed to process {}: {}", name, e))
}

#[test]
fn test_basic_sample_output() {
    let lines = process_sample("basic.textile");
    assert_eq!(lines.len(), 12);

    let output: Vec<&str> = lines.iter().filter_map(|l| l.output.as_deref()).collect();
    insta::assert_snapshot!(output.join("\n"), @r"
    \section{Getting Started}
    \subsection{Installation}
    \begin{quote}
    Read this first
    \end{quote}
    \textbf{Important}
    \emph{\textbf{very important}}
    \footnote{See the appendix}
    \textsuperscript{2}
    \textsubscript{n}
    ``quoted words''
    \begin{enumerate}
    \item first item
    \end{enumerate}
    \begin{verbatim}
    let x = 1;
    \end{verbatim}
    ");
}

#[test]
fn test_basic_sample_diagnostics() {
    let lines = process_sample("basic.textile");
    let diagnostics: Vec<&String> = lines.iter().flat_map(|l| &l.diagnostics).collect();
    assert_eq!(diagnostics, vec!["line 12: Syntax error at EOF"]);
    assert_eq!(lines[11].output, None);
}

#[test]
fn test_symbols_sample() {
    let lines = process_sample("symbols.textile");
    let outputs: Vec<Option<&str>> = lines.iter().map(|l| l.output.as_deref()).collect();
    assert_eq!(
        outputs,
        vec![
            Some("\\texttrademark "),
            Some("Acme\\textcopyright "),
            Some("Acme\\textregistered "),
            None,
            None,
        ]
    );

    // `(r)` is not a registered mark by default: both brackets are illegal and
    // the leftover `r` cannot follow plain text
    assert_eq!(
        lines[3].diagnostics,
        vec![
            "line 4: Illegal character => '('",
            "line 4: Illegal character => ')'",
            "line 4: Syntax error at => 'r' type => 'ALPHANUMTEXT'",
        ]
    );
    assert_eq!(
        lines[4].diagnostics,
        vec![
            "line 5: Illegal character => '%'",
            "line 5: Syntax error at => 'off' type => 'ALPHANUMTEXT'",
        ]
    );
}

#[test]
fn test_token_stage_on_sample() {
    let lines = process_file(
        sample("symbols.textile"),
        OutputFormat::TokenSimple,
        &Translator::default(),
    )
    .expect("token processing");
    assert_eq!(lines[0].output.as_deref(), Some("<TRADEMARK:\"(tm)\">"));
    assert_eq!(
        lines[2].output.as_deref(),
        Some("<ALPHANUMTEXT:\"Acme\"> <REGISTERED:\"(R])\">")
    );
}
