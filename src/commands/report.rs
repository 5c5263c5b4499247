//! One-shot commands: evaluate, stats, share, today

use crate::config::Config;
use crate::core::{Evaluation, Word, WordError};
use crate::game::{daily, share_text};
use crate::stats::Statistics;
use crate::storage::SavedData;
use anyhow::{Context, Result};
use std::time::SystemTime;

/// Evaluate `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn evaluate(guess: &str, solution: &str) -> Result<(Word, Evaluation), WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let evaluation = Evaluation::calculate(&guess, &solution);
    Ok((guess, evaluation))
}

fn load_saved(config: &Config) -> Result<SavedData> {
    match config.store() {
        Some(store) => store
            .load()
            .with_context(|| format!("cannot read {}", store.path().display())),
        None => Ok(SavedData::default()),
    }
}

/// Statistics from the save file
///
/// # Errors
///
/// Returns an error if the save file cannot be read.
pub fn saved_stats(config: &Config) -> Result<Statistics> {
    Ok(load_saved(config)?.stats)
}

/// Share text of the saved daily game, if it is `today`'s and finished
///
/// # Errors
///
/// Returns an error if the save file cannot be read.
pub fn saved_share(config: &Config, today: u64) -> Result<Option<String>> {
    Ok(load_saved(config)?
        .daily
        .filter(|state| state.day() == Some(today))
        .and_then(|state| share_text(&state)))
}

/// Daily number and time left until the next word
#[must_use]
pub fn today_line(now: SystemTime) -> String {
    format!(
        "Wordle #{}: prossima parola tra {}",
        daily::daily_index(now),
        daily::format_countdown(daily::time_until_next(now))
    )
}
