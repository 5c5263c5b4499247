//! Guess evaluation against the hidden solution
//!
//! Every letter of a submitted guess is classified as:
//! - `Correct` (c) - right letter in the right position
//! - `Present` (p) - letter occurs elsewhere in the solution
//! - `Absent`  (a) - letter is not (or no longer) available in the solution
//!
//! For repeated letters, exact matches are consumed first, then the remaining
//! copies are handed out left to right.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Compact single-character code (`c`, `p`, `a`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'c',
            Self::Present => 'p',
            Self::Absent => 'a',
        }
    }

    /// Parse a compact code, also accepting the share tiles
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'c' | 'C' | '🟩' => Some(Self::Correct),
            'p' | 'P' | '🟨' => Some(Self::Present),
            'a' | 'A' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Share tile used in the copied result text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Evaluation of one guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Evaluation([LetterState; WORD_LENGTH]);

impl Evaluation {
    /// Every letter in place
    pub const WIN: Self = Self([LetterState::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Per-position letter states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if the guess matched the solution
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Evaluate `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the letter pool
    /// 2. Second pass: left to right, mark a letter present while the pool
    ///    still holds a copy of it
    ///
    /// # Examples
    /// ```
    /// use wordle_it::core::{Evaluation, Word};
    ///
    /// let guess = Word::new("carta").unwrap();
    /// let solution = Word::new("pasta").unwrap();
    ///
    /// // C absent, A correct, R absent, T correct, A correct
    /// assert_eq!(Evaluation::calculate(&guess, &solution).to_code(), "acacc");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut available = solution.char_counts();

        // Allow: index pairs guess[i] with solution[i] and result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == solution.char_at(i) {
                result[i] = LetterState::Correct;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Compact form such as `"cpaac"`
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0.iter().map(|s| s.code()).collect()
    }

    /// Parse the compact form (share tiles are accepted too)
    ///
    /// # Examples
    /// ```
    /// use wordle_it::core::Evaluation;
    ///
    /// let e1 = Evaluation::from_code("cpaac").unwrap();
    /// let e2 = Evaluation::from_code("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(e1, e2);
    /// assert!(Evaluation::from_code("cpx").is_none());
    /// ```
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        let mut states = [LetterState::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            if len == WORD_LENGTH {
                return None;
            }
            states[len] = LetterState::from_code(ch)?;
            len += 1;
        }

        (len == WORD_LENGTH).then_some(Self(states))
    }

    /// Row of share tiles, e.g. `"🟩🟨⬜⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

impl TryFrom<String> for Evaluation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value).ok_or_else(|| format!("Invalid evaluation string: {value}"))
    }
}

impl From<Evaluation> for String {
    fn from(evaluation: Evaluation) -> Self {
        evaluation.to_code()
    }
}
