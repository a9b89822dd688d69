//! Wordle Clone - CLI
//!
//! Terminal Wordle with TUI and line-based modes, played against the
//! word-of-the-day service or the embedded word lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use wordle_clone::{
    commands::{run_simple, score_words},
    config::{Settings, SourceKind},
    interactive::{App, run_tui},
    output::print_score,
    remote::Services,
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the five-letter word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (default: ./wordle.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Play against the embedded word lists instead of the web services
    #[arg(long, global = true)]
    offline: bool,

    /// Base URL of the word-of-the-day and validate-word services
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.offline {
        settings.source = SourceKind::Offline;
    }
    if let Some(url) = cli.api_base_url {
        settings.api_base_url = url;
    }
    if let Some(path) = cli.log_file {
        settings.log_file = Some(path);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(&settings, matches!(command, Commands::Play))?;
    tracing::debug!(?settings, "settings loaded");

    match command {
        Commands::Score { guess, target } => run_score_command(&guess, &target),
        Commands::Play => run_play_command(&settings),
        Commands::Simple => run_simple_command(&settings),
    }
}

/// Install the tracing subscriber
///
/// Filter comes from `RUST_LOG` (default `warn`). The TUI owns the terminal,
/// so without a log file its output is discarded.
fn init_logging(settings: &Settings, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &settings.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if tui => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    // Shell arguments may carry stray whitespace; the scorer itself does not trim
    let result = score_words(guess.trim(), target.trim()).map_err(|e| anyhow::anyhow!(e))?;
    print_score(&result.guess, &result.target, &result.feedback);
    Ok(())
}

fn run_play_command(settings: &Settings) -> Result<()> {
    let runtime = build_runtime()?;
    let services = Services::from_settings(settings)?;

    let app = App::new(services, runtime.handle().clone());
    run_tui(app)
}

fn run_simple_command(settings: &Settings) -> Result<()> {
    let runtime = build_runtime()?;
    let services = Services::from_settings(settings)?;

    run_simple(&services, runtime.handle())
}
