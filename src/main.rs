//! lingo-drill CLI
//!
//! Practice vocabulary: see a word, type its translation.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use lingo_drill::classify::classify;
use lingo_drill::report::{format_check, format_words, CheckReport};
use lingo_drill::session::Session;
use lingo_drill::tui;
use lingo_drill::types::{OutputFormat, PracticeConfig, AUTO_ADVANCE_DELAY};
use lingo_drill::words::{default_words_path, resolve_words};

#[derive(Parser)]
#[command(name = "lingo-drill")]
#[command(about = "Flashcard practice: see a word, type its translation")]
#[command(version)]
struct Cli {
    /// Write logs to this file (the terminal belongs to the practice screen)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Practice interactively in the terminal
    Practice {
        /// Word list file (default: user config dir, else built-in list)
        #[arg(long)]
        words: Option<PathBuf>,

        /// Word number to start at (1-based, clamped to the list)
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i64>,

        /// Milliseconds a correct guess stays on screen
        #[arg(long, default_value_t = AUTO_ADVANCE_DELAY.as_millis() as u64)]
        delay_ms: u64,
    },

    /// Print the word list
    Words {
        /// Word list file (default: user config dir, else built-in list)
        #[arg(long)]
        words: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Classify a single guess against an expected translation
    Check {
        /// The expected translation
        expected: String,

        /// The guess to classify
        guess: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Practice { words, start, delay_ms } => cmd_practice(PracticeConfig {
            words_path: words,
            start,
            advance_delay: Duration::from_millis(delay_ms),
        }),
        Commands::Words { words, format } => cmd_words(words, format.into()),
        Commands::Check { expected, guess, format } => cmd_check(expected, guess, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Initialize env_logger. `RUST_LOG` overrides the default filter.
///
/// With a log file the default is `info`, otherwise `warn` so nothing
/// scribbles over the practice screen.
fn init_logging(log_file: Option<&Path>) -> Result<(), String> {
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("cannot open log file {}: {}", path.display(), e))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_practice(config: PracticeConfig) -> Result<(), String> {
    let words = resolve_words(config.words_path.as_deref()).map_err(|e| e.to_string())?;
    let session = Session::starting_at_position(words, config.start);

    let session = tui::run::run(session, config.advance_delay).map_err(|e| e.to_string())?;

    let total = session.words().len();
    if session.is_completed() {
        println!("Practiced all {} words.", total);
    } else {
        println!("Stopped at word {} of {}.", session.position(), total);
        println!("Resume with: lingo-drill practice --start {}", session.position());
    }

    Ok(())
}

fn cmd_words(path: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let words = resolve_words(path.as_deref()).map_err(|e| e.to_string())?;

    if format == OutputFormat::Human && path.is_none() {
        if let Some(default) = default_words_path() {
            eprintln!("Custom list location: {}", default.display());
            eprintln!();
        }
    }

    print!("{}", format_words(&words, format));
    Ok(())
}

fn cmd_check(expected: String, guess: String, format: OutputFormat) -> Result<(), String> {
    let result = classify(&expected, &guess);
    let report = CheckReport {
        expected,
        guess,
        result,
    };
    print!("{}", format_check(&report, format));
    Ok(())
}
