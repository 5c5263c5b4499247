//! On-screen keyboard layout and per-letter hints

use super::state::GameState;
use crate::core::LetterState;

/// Letter rows of the on-screen keyboard; Enter sits left of the last row,
/// Backspace right of it
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// What the submitted rows revealed about a key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyHint {
    /// Not guessed yet
    #[default]
    Unused,
    /// Guessed, not in the solution
    Absent,
    /// In the solution, position not found yet
    Present,
    /// Found in the right position at least once
    Correct,
}

impl From<LetterState> for KeyHint {
    fn from(state: LetterState) -> Self {
        match state {
            LetterState::Absent => Self::Absent,
            LetterState::Present => Self::Present,
            LetterState::Correct => Self::Correct,
        }
    }
}

/// Hints for `a`..`z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyHints([KeyHint; 26]);

impl KeyHints {
    /// Hint for a letter; anything outside `a`..`z` is `Unused`
    #[must_use]
    pub fn get(&self, letter: char) -> KeyHint {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.0[(letter as u8 - b'a') as usize]
        } else {
            KeyHint::Unused
        }
    }

    fn raise(&mut self, letter: char, hint: KeyHint) {
        if letter.is_ascii_lowercase() {
            let slot = &mut self.0[(letter as u8 - b'a') as usize];
            *slot = (*slot).max(hint);
        }
    }
}

/// Best hint per letter across every submitted row
///
/// Only submitted rows count; letters typed into the current row reveal
/// nothing.
#[must_use]
pub fn key_hints(state: &GameState) -> KeyHints {
    let mut hints = KeyHints::default();
    for (row, evaluation) in state.submitted() {
        for (col, &letter_state) in evaluation.states().iter().enumerate() {
            if let Some(letter) = row.letter(col) {
                hints.raise(letter, letter_state.into());
            }
        }
    }
    hints
}
