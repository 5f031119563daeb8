//! Command-line interface for textile2latex
//! Translates a Textile file line by line and writes the LaTeX fragments to stdout.
//!
//! Usage:
//!   textile2latex -f `<path>` [--format `<format>`] [--config `<config.toml>`]
//!                 [--registered-mark `<mode>`] [--list-wrapping `<mode>`] [-v]
//!
//! The mode flags override the same keys of the built-in defaults and of the
//! `--config` file.
//!
//! Diagnostics (illegal characters, syntax errors) go to stderr and never stop
//! the run; a line that fails to parse simply produces no output.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use textile2latex::textile::config::{Loader, TranslatorConfig};
use textile2latex::textile::processor::{process_file, OutputFormat};
use textile2latex::Translator;

fn cli() -> Command {
    Command::new("textile2latex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate Textile markup to LaTeX, one line at a time")
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Read input from a specific file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("What to print for each line")
                .value_parser(OutputFormat::NAMES.to_vec())
                .default_value("latex"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("registered-mark")
                .long("registered-mark")
                .help("Override lexer.registered_mark")
                .value_parser(["verbatim", "corrected"]),
        )
        .arg(
            Arg::new("list-wrapping")
                .long("list-wrapping")
                .help("Override grammar.list_wrapping")
                .value_parser(["per-item", "outermost"]),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Command-line flags and the configuration keys they override
const OVERRIDES: &[(&str, &str)] = &[
    ("registered-mark", "lexer.registered_mark"),
    ("list-wrapping", "grammar.list_wrapping"),
];

fn load_config(path: Option<&PathBuf>, overrides: &[(&str, &str)]) -> Result<TranslatorConfig> {
    let mut loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    for (key, value) in overrides {
        loader = loader
            .set_override(key, *value)
            .with_context(|| format!("invalid override for {}", key))?;
    }
    loader.build().context("failed to load configuration")
}

fn cli_overrides(matches: &ArgMatches) -> Vec<(&'static str, &str)> {
    OVERRIDES
        .iter()
        .filter_map(|&(flag, key)| {
            matches
                .get_one::<String>(flag)
                .map(|value| (key, value.as_str()))
        })
        .collect()
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let Some(path) = matches.get_one::<PathBuf>("file") else {
        cli().print_help()?;
        println!();
        return Ok(());
    };

    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("latex")
        .parse()?;
    let config = load_config(
        matches.get_one::<PathBuf>("config"),
        &cli_overrides(&matches),
    )?;
    log::debug!("configuration: {:?}", config);

    let lines = process_file(path, format, &Translator::new(config))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        for diagnostic in &line.diagnostics {
            eprintln!("{}", diagnostic);
        }
        if let Some(output) = &line.output {
            writeln!(out, "{}", output)?;
        }
    }
    Ok(())
}
