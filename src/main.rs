//! Token listing driver.
//!
//! Lexes a source file (or inline source), prints one line per token through
//! end-of-input, then reports unrecognised characters and truncated lexemes.

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{bail, Context, Result};
use clap::{builder::TypedValueParser, Parser};
use houselang::{
    config::{LexerConfig, DEFAULT_MAX_LEXEME_LEN},
    display_error,
    lexer::lexer::{diagnose, tokenize_with_config},
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Print the token stream of a house-language source text.
#[derive(Parser, Debug)]
#[command(name = "houselang")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token stream of a house-language source", long_about = None)]
struct Cli {
    /// Source file to lex
    #[arg(required_unless_present = "eval")]
    file: Option<PathBuf>,

    /// Lex this source text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Maximum lexeme length in bytes; longer lexemes are truncated
    #[arg(
        long,
        env = "HOUSELANG_MAX_LEXEME_LEN",
        default_value_t = DEFAULT_MAX_LEXEME_LEN,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    max_lexeme_len: usize,

    /// Enable verbose output
    #[arg(short, long, env = "HOUSELANG_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "HOUSELANG_NO_COLOR")]
    no_color: bool,

    /// Exit with a failure status if any diagnostic was reported
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let (source, file_name) = load_source(&cli)?;
    let config = LexerConfig::default().with_max_lexeme_len(cli.max_lexeme_len);

    let start = Instant::now();
    let tokens = tokenize_with_config(source.clone(), Some(file_name.clone()), config);
    info!("Tokenized {} in {:?}", file_name, start.elapsed());

    for token in &tokens {
        println!("{}", token);
    }

    let errors = diagnose(&tokens);
    for error in &errors {
        display_error(error, &source, &file_name);
    }

    if cli.strict && !errors.is_empty() {
        debug!(count = errors.len(), "diagnostics reported in strict mode");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging system. Logs go to stderr so the token listing on
/// stdout stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

fn load_source(cli: &Cli) -> Result<(String, String)> {
    if let Some(source) = &cli.eval {
        return Ok((source.clone(), String::from("shell")));
    }

    let Some(path) = &cli.file else {
        bail!("No input given: pass a source file or --eval <SOURCE>");
    };

    let source = read_to_string(path)
        .with_context(|| format!("Failed to read source file {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok((source, file_name))
}
