//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::game::{Session, SubmitOutcome};
use crate::output::{print_board, print_game_over, print_keyboard};
use crate::remote::Services;
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(services: &Services, runtime: &Handle) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Simple Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word in 6 tries. Each guess must be a valid 5-letter word.");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let mut session = Session::new();
    start_game(&mut session, services, runtime);

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => start_game(&mut session, services, runtime),
            guess => play_guess(&mut session, services, runtime, guess),
        }
    }
}

fn start_game(session: &mut Session, services: &Services, runtime: &Handle) {
    let result = with_spinner(
        runtime,
        "Loading word of the day...",
        session.new_game(services.source.as_ref()),
    );
    match result {
        Ok(_) => {
            println!("🔄 New game started!");
            print_board(session);
        }
        Err(err) => {
            println!("{}", format!("❌ {err}").red().bold());
            if session.target().is_none() {
                println!("Type 'new' to try again or 'quit' to exit.\n");
            } else {
                println!("Continuing the previous game.\n");
            }
        }
    }
}

fn play_guess(session: &mut Session, services: &Services, runtime: &Handle, guess: &str) {
    if session.target().is_none() {
        println!("No game in progress. Type 'new' to load a word.\n");
        return;
    }
    if session.status().is_terminal() {
        println!("This game is over. Type 'new' to play again or 'quit' to exit.\n");
        return;
    }
    if guess.chars().count() != 5 || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("❌ Guesses must be exactly 5 letters.\n");
        return;
    }

    // Replace whatever is on the current row
    while session.delete() {}
    for ch in guess.chars() {
        session.letter(ch);
    }

    let outcome = with_spinner(
        runtime,
        "Checking word...",
        session.submit_with(services.validator.as_ref()),
    );

    match outcome {
        SubmitOutcome::NotAWord(word) => {
            println!("❌ {} is not in the word list.\n", word.text().bold());
        }
        SubmitOutcome::Scored { status, .. } => {
            print_board(session);
            if status.is_terminal() {
                print_game_over(session);
                println!("Type 'new' to play again or 'quit' to exit.\n");
            } else {
                print_keyboard(session);
            }
        }
        SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
    }
}

/// Block on a network call while showing a spinner
fn with_spinner<F: Future>(runtime: &Handle, message: &str, fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = runtime.block_on(fut);

    spinner.finish_and_clear();
    output
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
