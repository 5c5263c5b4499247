//! Core domain types for Wordle
//!
//! Pure types with no I/O: validated words and guess evaluation.

mod evaluation;
mod word;

pub use evaluation::{Evaluation, LetterState};
pub use word::{WORD_LENGTH, Word, WordError};
