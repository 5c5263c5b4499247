//! Five-letter word representation
//!
//! A Word stores a validated, lowercased five-letter word plus its raw bytes for evaluation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A five-letter word made of ASCII letters `a`..`z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("la parola deve avere esattamente 5 lettere, trovate {0}")]
    InvalidLength(usize),
    #[error("la parola deve contenere solo lettere senza accenti")]
    NonAscii,
    #[error("la parola contiene caratteri non validi")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters (accented vowels included)
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_it::core::Word;
    ///
    /// let word = Word::new("Pasta").unwrap();
    /// assert_eq!(word.text(), "pasta");
    ///
    /// assert!(Word::new("troppo lunga").is_err());
    /// assert!(Word::new("città").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            let len = text.chars().count();
            if len != WORD_LENGTH {
                return Err(WordError::InvalidLength(len));
            }
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Build a word from raw letters, as typed into a board row
    ///
    /// # Errors
    /// Returns a `WordError` if any byte is not an ASCII letter.
    pub fn from_letters(letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        let text = String::from_utf8(letters.to_vec()).map_err(|_| WordError::NonAscii)?;
        Self::new(text)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by evaluation to handle repeated letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
