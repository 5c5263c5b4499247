//! Starting a game from the configuration and saving it back

use crate::config::Config;
use crate::game::{Game, daily};
use crate::storage::{FORMAT_VERSION, SavedData, StorageError, Store};
use crate::wordlists::WordBank;
use anyhow::{Context, Result};
use log::debug;

/// Build a game for today, resuming saved progress when a store is configured
///
/// # Errors
///
/// Returns an error if the save file exists but cannot be read.
pub fn start_game<'a>(config: &Config, words: &'a WordBank) -> Result<(Game<'a>, Option<Store>)> {
    start_game_on(config, words, daily::today())
}

/// [`start_game`] with an explicit daily index
///
/// # Errors
///
/// Returns an error if the save file exists but cannot be read.
pub fn start_game_on<'a>(
    config: &Config,
    words: &'a WordBank,
    today: u64,
) -> Result<(Game<'a>, Option<Store>)> {
    let mut game =
        Game::new(words, config.mode, today, config.rng()).with_word_check(config.check_words);

    let store = config.store();
    if let Some(store) = &store {
        let saved = store.load().with_context(|| {
            format!(
                "cannot read saved progress from {} (use --no-save to play without it)",
                store.path().display()
            )
        })?;
        game = game.with_stats(saved.stats);
        if let Some(daily) = saved.daily
            && !game.restore_daily(daily)
        {
            debug!("Saved daily board is not for today's word");
        }
    }

    Ok((game, store))
}

/// What gets written for a game
#[must_use]
pub fn saved_data(game: &Game) -> SavedData {
    SavedData {
        version: FORMAT_VERSION,
        daily: game.daily_state().cloned(),
        stats: game.stats().clone(),
    }
}

/// Save a game when a store is configured
///
/// # Errors
///
/// Returns an error if writing the save file fails.
pub fn save_game(store: Option<&Store>, game: &Game) -> Result<(), StorageError> {
    match store {
        Some(store) => store.save(&saved_data(game)),
        None => Ok(()),
    }
}
