//! `ember-lex`: scan Ember source files and dump their tokens
//!
//! Usage: ember-lex [OPTIONS] [FILE]...

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ember::printer::{render_json, render_kinds, render_table};
use ember::{ErrorPolicy, KeywordRevision, ScanConfig, UnterminatedStringPolicy};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Output format for scanned tokens
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Aligned table, one row per token
    Table,
    /// Whole scan report as JSON
    Json,
    /// `KIND lexeme` per line
    Kinds,
}

/// Keyword table selection
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Keywords {
    Initial,
    Extended,
    Current,
}

impl From<Keywords> for KeywordRevision {
    fn from(k: Keywords) -> Self {
        match k {
            Keywords::Initial => KeywordRevision::Initial,
            Keywords::Extended => KeywordRevision::Extended,
            Keywords::Current => KeywordRevision::CURRENT,
        }
    }
}

/// Scan Ember source and print its tokens
#[derive(Parser)]
#[command(name = "ember-lex")]
#[command(about = "Ember lexical scanner")]
#[command(version)]
struct Cli {
    /// Source files (reads stdin when none are given)
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Stop at the first scan error
    #[arg(long)]
    fail_fast: bool,

    /// Drop unterminated strings without a diagnostic
    #[arg(long)]
    silent_unterminated: bool,

    /// Keyword table revision
    #[arg(long, value_enum)]
    keywords: Option<Keywords>,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Outcome of a run that got as far as scanning
#[derive(Debug, PartialEq, Eq)]
enum Status {
    Clean,
    Diagnostics,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| ember::Error::io(path.display().to_string(), &e))?;
            ScanConfig::from_json(&text)
                .with_context(|| format!("in configuration file {}", path.display()))?
        }
        None => ScanConfig::default(),
    };

    if cli.fail_fast {
        config.on_error = ErrorPolicy::FailFast;
    }
    if cli.silent_unterminated {
        config.unterminated_strings = UnterminatedStringPolicy::Silent;
    }
    if let Some(keywords) = cli.keywords {
        config.keywords = keywords.into();
    }
    Ok(config)
}

fn read_sources(files: &[PathBuf]) -> anyhow::Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| ember::Error::io("<stdin>", &e))?;
        return Ok(vec![("<stdin>".to_string(), text)]);
    }

    files
        .iter()
        .map(|path| -> anyhow::Result<(String, String)> {
            let name = path.display().to_string();
            let text = std::fs::read_to_string(path).map_err(|e| ember::Error::io(&name, &e))?;
            Ok((name, text))
        })
        .collect()
}

fn run(cli: &Cli) -> anyhow::Result<Result<Status, ember::Error>> {
    let config = load_config(cli)?;
    let sources = read_sources(&cli.files)?;
    let mut status = Status::Clean;

    for (name, text) in &sources {
        let report = match ember::scan_with(text, &config) {
            Ok(report) => report,
            Err(err) => return Ok(Err(err)),
        };

        if sources.len() > 1 {
            println!("==> {} <==", name);
        }
        match cli.format {
            Format::Table => print!("{}", render_table(&report.tokens)),
            Format::Kinds => print!("{}", render_kinds(&report.tokens)),
            Format::Json => println!("{}", render_json(&report)?),
        }

        for diagnostic in &report.diagnostics {
            eprintln!("{}", diagnostic);
        }
        if !report.is_clean() {
            status = Status::Diagnostics;
        }
    }

    Ok(Ok(status))
}

/// Process exit code: 0 clean, 1 diagnostics or a fail-fast scan error, 2 I/O or config error
fn exit_code(outcome: anyhow::Result<Result<Status, ember::Error>>) -> u8 {
    match outcome {
        Ok(Ok(Status::Clean)) => 0,
        Ok(Ok(Status::Diagnostics)) => 1,
        Ok(Err(scan_error)) => {
            eprintln!("{}", scan_error);
            1
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            2
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    ExitCode::from(exit_code(run(&cli)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ember-lex").chain(args.iter().copied())).unwrap()
    }

    fn path_of(file: &NamedTempFile) -> &str {
        file.path().to_str().unwrap()
    }

    #[test]
    fn test_clean_source_exits_zero() {
        let file = source_file("var x = 1;\n");
        assert_eq!(exit_code(run(&cli(&["-f", "kinds", path_of(&file)]))), 0);
    }

    #[test]
    fn test_diagnostics_exit_one() {
        let file = source_file("x = 1\n@oops\n");
        let outcome = run(&cli(&[path_of(&file)]));
        assert!(matches!(outcome, Ok(Ok(Status::Diagnostics))));
        assert_eq!(exit_code(outcome), 1);
    }

    #[test]
    fn test_fail_fast_error_exits_one() {
        let file = source_file("ok\nx = \"open\n");
        let outcome = run(&cli(&["--fail-fast", path_of(&file)]));
        assert!(matches!(
            outcome,
            Ok(Err(ember::Error::UnterminatedString { line: 2, .. }))
        ));
        assert_eq!(exit_code(outcome), 1);
    }

    #[test]
    fn test_missing_file_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.em");
        let outcome = run(&cli(&[missing.to_str().unwrap()]));
        assert!(outcome.is_err());
        assert_eq!(exit_code(outcome), 2);
    }

    #[test]
    fn test_bad_config_exits_two() {
        let config = source_file(r#"{ "no-such-field": true }"#);
        let file = source_file("x");
        let outcome = run(&cli(&["--config", path_of(&config), path_of(&file)]));
        assert_eq!(exit_code(outcome), 2);
    }

    #[test]
    fn test_flags_override_config_file() {
        let config = source_file(r#"{ "keywords": "initial", "on-error": "report-and-skip-line" }"#);

        let from_file = load_config(&cli(&["--config", path_of(&config)])).unwrap();
        assert_eq!(from_file.keywords, KeywordRevision::Initial);
        assert_eq!(from_file.on_error, ErrorPolicy::ReportAndSkipLine);

        let overridden = load_config(&cli(&[
            "--config",
            path_of(&config),
            "--keywords",
            "extended",
            "--fail-fast",
            "--silent-unterminated",
        ]))
        .unwrap();
        assert_eq!(overridden.keywords, KeywordRevision::Extended);
        assert_eq!(overridden.on_error, ErrorPolicy::FailFast);
        assert_eq!(
            overridden.unterminated_strings,
            UnterminatedStringPolicy::Silent
        );
    }
}
