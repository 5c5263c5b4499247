//! The word-guessing game
//!
//! [`GameState`] is the board and its pure transitions, [`Game`] drives it
//! with a word bank, randomness and statistics. The remaining modules derive
//! views from a state: keyboard hints, share text, daily numbering and the
//! Italian strings shown to the player.

pub mod daily;
pub mod keyboard;
pub mod messages;
mod session;
mod share;
mod state;

pub use keyboard::{KEYBOARD_ROWS, KeyHint, KeyHints, key_hints};
pub use session::Game;
pub use share::{SHARE_TITLE, share_text};
pub use state::{
    Action, GameMode, GameState, GameStatus, MAX_ATTEMPTS, Modal, Outcome, Rejection, Row,
};
