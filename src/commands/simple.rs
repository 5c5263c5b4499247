//! Simple interactive CLI mode
//!
//! Line-based game on stdin/stdout, without the TUI

use super::session::save_game;
use crate::core::WORD_LENGTH;
use crate::game::{
    Action, Game, GameMode, GameStatus, MAX_ATTEMPTS, Outcome, daily, key_hints, messages,
    share_text,
};
use crate::output::{print_board, print_keyboard, print_stats};
use crate::storage::Store;
use anyhow::{Context, Result};
use colored::Colorize;
use log::warn;
use std::io::{self, Write};
use std::time::SystemTime;

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    ToggleMode,
    Stats,
    Help,
    Guess(String),
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let command = match line.to_lowercase().as_str() {
            "" => return None,
            "esci" | "q" | "quit" => Self::Quit,
            "nuova" | "n" => Self::NewGame,
            "modalita" | "modalità" | "m" => Self::ToggleMode,
            "stat" | "s" => Self::Stats,
            "aiuto" | "?" => Self::Help,
            _ => Self::Guess(line.to_string()),
        };
        Some(command)
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(game: &mut Game, store: Option<&Store>) -> Result<()> {
    println!("\n{}", "═".repeat(50).cyan());
    println!("   {}", messages::TITLE.bright_cyan().bold());
    println!("{}\n", "═".repeat(50).cyan());
    print_help();
    show(game);

    loop {
        let prompt = format!(
            "[{}] Tentativo {}/{MAX_ATTEMPTS}",
            game.state().mode(),
            (game.state().current_row() + 1).min(MAX_ATTEMPTS)
        );
        let Some(line) = get_user_input(&prompt)? else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Stats => print_stats(game.stats()),
            Command::NewGame => {
                if game.dispatch(Action::Reset) == Outcome::NewGame {
                    println!("\n🔄 {}\n", messages::NEW_GAME);
                    show(game);
                } else {
                    println!("{}", messages::DAILY_ONLY_ONCE.yellow());
                }
            }
            Command::ToggleMode => {
                if let Outcome::ModeChanged(mode) = game.dispatch(Action::ToggleGameMode) {
                    println!("\nModalità: {}", mode.name().bright_cyan().bold());
                    persist(store, game);
                    show(game);
                }
            }
            Command::Guess(text) => guess(game, store, &text),
        }
    }

    println!("\n👋 Alla prossima!\n");
    Ok(())
}

fn guess(game: &mut Game, store: Option<&Store>, text: &str) {
    if game.state().status().is_finished() {
        println!("Partita finita. Scrivi 'nuova' o 'modalita'.");
        return;
    }
    if text.chars().count() > WORD_LENGTH {
        println!("{}", "Troppe lettere".red());
        return;
    }

    while game.dispatch(Action::DeleteLetter) == Outcome::LetterDeleted {}
    for c in text.chars() {
        game.dispatch(Action::AddLetter(c));
    }

    match game.dispatch(Action::NextRow) {
        Outcome::Rejected(rejection) => {
            println!("{}", messages::rejection(rejection).red());
            while game.dispatch(Action::DeleteLetter) == Outcome::LetterDeleted {}
        }
        Outcome::Evaluated { status, .. } => {
            persist(store, game);
            show(game);
            if status.is_finished() {
                finished(game, status);
            }
        }
        _ => {}
    }
}

fn finished(game: &Game, status: GameStatus) {
    let state = game.state();
    if let Some(title) = messages::result(status, state.current_row(), state.solution()) {
        let title = if status == GameStatus::Win {
            title.bright_green().bold()
        } else {
            title.bright_red().bold()
        };
        println!("{title}\n");
    }
    print_stats(game.stats());

    match state.mode() {
        GameMode::Daily => {
            if let Some(text) = share_text(state) {
                println!("{}:\n\n{text}", messages::SHARE.bright_cyan().bold());
            }
            let remaining = daily::time_until_next(SystemTime::now());
            println!(
                "{} {}\n",
                messages::NEXT_WORD,
                daily::format_countdown(remaining).bright_yellow()
            );
        }
        GameMode::Random => {
            println!("Scrivi 'nuova' per {}\n", messages::PLAY_AGAIN.to_lowercase());
        }
    }
}

fn show(game: &Game) {
    print_board(game.state());
    print_keyboard(&key_hints(game.state()));
}

fn persist(store: Option<&Store>, game: &Game) {
    if let Err(e) = save_game(store, game) {
        warn!("Could not save progress: {e}");
        println!("{}", format!("Salvataggio non riuscito: {e}").red());
    }
}

fn print_help() {
    for paragraph in messages::INFO.iter().skip(2) {
        println!("{paragraph}\n");
    }
    println!("Comandi: 'nuova' nuova parola casuale, 'modalita' cambia modalità,");
    println!("         'stat' statistiche, 'aiuto' questo testo, 'esci' per uscire\n");
}

/// Read a trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("cannot write to stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("cannot read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
