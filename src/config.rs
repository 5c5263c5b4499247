//! Runtime configuration, resolved from the command line and environment

use crate::game::GameMode;
use crate::storage::Store;
use crate::wordlists::{WordBank, WordBankError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the save file location
pub const STATE_ENV: &str = "WORDLE_IT_STATE";

const STATE_FILE_NAME: &str = ".wordle-it.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Mode the session starts in
    pub mode: GameMode,
    /// Custom solution list; the embedded lists are used when `None`
    pub answers_path: Option<PathBuf>,
    /// Custom accepted-guess list, only read together with `answers_path`
    pub allowed_path: Option<PathBuf>,
    /// Save file; `None` disables saving
    pub state_path: Option<PathBuf>,
    /// Refuse guesses missing from the word list
    pub check_words: bool,
    /// Fixed seed for random mode
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::Daily,
            answers_path: None,
            allowed_path: None,
            state_path: default_state_path(),
            check_words: true,
            seed: None,
        }
    }
}

impl Config {
    /// Load the configured word lists
    ///
    /// # Errors
    /// Returns an error if a custom list cannot be read or has no solutions.
    pub fn word_bank(&self) -> Result<WordBank, WordBankError> {
        match &self.answers_path {
            Some(answers) => WordBank::from_files(answers, self.allowed_path.as_deref()),
            None => Ok(WordBank::embedded()),
        }
    }

    /// Random source for random mode
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn store(&self) -> Option<Store> {
        self.state_path.as_ref().map(Store::new)
    }
}

/// `$WORDLE_IT_STATE`, else `$HOME/.wordle-it.json`
#[must_use]
pub fn default_state_path() -> Option<PathBuf> {
    state_path_from(std::env::var_os(STATE_ENV), std::env::var_os("HOME"))
}

fn state_path_from(explicit: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    explicit
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            home.filter(|h| !h.is_empty())
                .map(|h| PathBuf::from(h).join(STATE_FILE_NAME))
        })
}
