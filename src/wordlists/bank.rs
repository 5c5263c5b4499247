//! Word bank: the solutions the game draws from and the guesses it accepts

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::{WORD_LENGTH, Word};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seed of the fixed permutation that maps day numbers to solutions
const DAILY_SEED: u64 = 0x5749_5444_4149_4c59;

#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("la lista delle soluzioni è vuota")]
    EmptyAnswers,
    #[error("impossibile leggere {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Solutions plus the set of accepted guesses
#[derive(Debug, Clone)]
pub struct WordBank {
    answers: Vec<Word>,
    accepted: FxHashSet<[u8; WORD_LENGTH]>,
    daily_order: Vec<usize>,
}

impl WordBank {
    /// Build a bank from explicit lists
    ///
    /// Every answer is accepted as a guess even if `allowed` omits it.
    ///
    /// # Errors
    /// Returns `WordBankError::EmptyAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Result<Self, WordBankError> {
        if answers.is_empty() {
            return Err(WordBankError::EmptyAnswers);
        }
        Ok(Self::build(answers, allowed))
    }

    /// Bank backed by the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::build(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Load the solutions (and optionally the accepted guesses) from files
    ///
    /// Without an `allowed` file only the solutions are accepted as guesses.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or the solution list is empty.
    pub fn from_files(answers: &Path, allowed: Option<&Path>) -> Result<Self, WordBankError> {
        let read = |path: &Path| {
            load_from_file(path).map_err(|source| WordBankError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let answer_words = read(answers)?;
        let allowed_words = match allowed {
            Some(path) => read(path)?,
            None => Vec::new(),
        };
        Self::new(answer_words, allowed_words)
    }

    fn build(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        debug_assert!(!answers.is_empty(), "answer list must not be empty");

        let accepted: FxHashSet<[u8; WORD_LENGTH]> = allowed
            .iter()
            .chain(answers.iter())
            .map(|w| *w.chars())
            .collect();

        let mut daily_order: Vec<usize> = (0..answers.len()).collect();
        daily_order.shuffle(&mut StdRng::seed_from_u64(DAILY_SEED));

        debug!(
            "Word bank ready: {} solutions, {} accepted guesses",
            answers.len(),
            accepted.len()
        );

        Self {
            answers,
            accepted,
            daily_order,
        }
    }

    /// All possible solutions
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Check whether a guess is in the word list
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word.chars())
    }

    /// Pick a solution at random
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.answers[rng.random_range(0..self.answers.len())]
    }

    /// Solution of the given day
    ///
    /// Days walk a fixed permutation of the solutions, so consecutive days
    /// don't follow alphabetical order and every word is used once per cycle.
    #[must_use]
    pub fn daily_answer(&self, day: u64) -> &Word {
        let slot = (day % self.daily_order.len() as u64) as usize;
        &self.answers[self.daily_order[slot]]
    }
}
