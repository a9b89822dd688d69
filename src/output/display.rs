//! Display functions for line-based modes

use super::formatters::{KEYBOARD_ROWS, keyboard_row, tile, tile_row};
use crate::core::{Feedback, MAX_ATTEMPTS, Verdict, WORD_LENGTH, Word};
use crate::game::{GameStatus, Session};
use colored::Colorize;

/// Print every submitted row, then blank rows for the attempts left
pub fn print_board(session: &Session) {
    println!();
    for (row, word) in session.history().iter().enumerate() {
        println!("   {}", tile_row(word, &session.row_feedback(row)));
    }
    let blank: String = (0..WORD_LENGTH)
        .map(|_| tile('_', Verdict::Empty).dimmed().to_string())
        .collect();
    for _ in session.history().len()..MAX_ATTEMPTS {
        println!("   {blank}");
    }
    println!();
}

/// Print the keyboard coloured by the letters guessed so far
pub fn print_keyboard(session: &Session) {
    let states = session.keyboard();
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        println!("{}{}", " ".repeat(indent * 2 + 1), keyboard_row(keys, &states));
    }
    println!();
}

/// Print the end-of-game banner and share grid
pub fn print_game_over(session: &Session) {
    let target = session.target().map(Word::text).unwrap_or_default();

    println!("{}", "═".repeat(40).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            let guesses = session.history().len();
            println!(
                "  {}",
                format!(
                    "🎉 You won in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!("  {}", "😔 Game over".red().bold());
            println!("  The word was: {}", target.bright_yellow().bold());
        }
        GameStatus::Playing => {}
    }
    if let Some(share) = session.share_text() {
        println!();
        for line in share.lines() {
            println!("  {line}");
        }
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!();
}

/// Print the result of scoring one guess against a target
pub fn print_score(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} vs {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n   {}", tile_row(guess, feedback));
    println!("   {}", feedback.to_emoji());
    println!(
        "\n   {} correct, {} present",
        feedback.count_correct().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold()
    );
    if feedback.is_perfect() {
        println!("\n   {}", "✅ Exact match!".green().bold());
    }
    println!();
}
