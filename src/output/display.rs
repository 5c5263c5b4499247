//! Coloured printing for the line-based commands

use super::formatters::{distribution_bars, stats_summary};
use crate::core::{Evaluation, LetterState, WORD_LENGTH, Word};
use crate::game::{GameState, KEYBOARD_ROWS, KeyHint, KeyHints, Row};
use crate::stats::Statistics;
use colored::{ColoredString, Colorize};

/// A single board tile: ` X ` on the colour of its state
#[must_use]
pub fn tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.bright_white().bold(),
    }
}

fn evaluated_row(row: &Row, evaluation: &Evaluation) -> String {
    (0..WORD_LENGTH)
        .map(|col| {
            tile(row.letter(col).unwrap_or(' '), Some(evaluation.states()[col])).to_string()
        })
        .collect()
}

fn open_row(row: &Row) -> String {
    (0..WORD_LENGTH)
        .map(|col| match row.letter(col) {
            Some(letter) => tile(letter, None).to_string(),
            None => " · ".bright_black().to_string(),
        })
        .collect()
}

/// Print a guess with its evaluation, tiles then emoji
pub fn print_evaluation(guess: &Word, evaluation: &Evaluation) {
    let tiles: String = guess
        .text()
        .chars()
        .zip(evaluation.states())
        .map(|(letter, &state)| tile(letter, Some(state)).to_string())
        .collect();
    println!("{tiles}  {}", evaluation.to_emoji());
}

/// Print all six rows of a board
pub fn print_board(state: &GameState) {
    println!();
    for (i, row) in state.board().iter().enumerate() {
        let line = match &state.evaluations()[i] {
            Some(evaluation) => evaluated_row(row, evaluation),
            None => open_row(row),
        };
        println!("   {line}");
    }
    println!();
}

/// Print the keyboard with letters coloured by hint
pub fn print_keyboard(hints: &KeyHints) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| {
                let key = c.to_ascii_uppercase().to_string();
                match hints.get(c) {
                    KeyHint::Correct => key.green().bold().to_string(),
                    KeyHint::Present => key.yellow().bold().to_string(),
                    KeyHint::Absent => key.bright_black().to_string(),
                    KeyHint::Unused => key.bright_white().to_string(),
                }
            })
            .collect();
        println!("   {}{}", " ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print statistics with the guess distribution
pub fn print_stats(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICHE".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   {}", stats_summary(stats));
    if let Some(average) = stats.average_guesses() {
        println!(
            "   Media tentativi: {}",
            format!("{average:.2}").bright_yellow().bold()
        );
    }

    println!("\n📈 {}", "Distribuzione:".bright_cyan().bold());
    for (guesses, count, bar) in distribution_bars(stats, 30) {
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!("   ✗: {}", stats.guess_distribution[0].to_string().red());
    println!();
}
