//! Wordle IT
//!
//! Italian-language Wordle for the terminal: guess the five-letter word in six
//! attempts, either the word of the day or a random one.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_it::core::{Evaluation, Word};
//!
//! let guess = Word::new("carta").unwrap();
//! let solution = Word::new("pasta").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &solution);
//! assert_eq!(evaluation.to_emoji(), "⬜🟩⬜🟩🟩");
//! ```

// Words and evaluation
pub mod core;

// Word lists
pub mod wordlists;

// Game state machine
pub mod game;

// Statistics and saved progress
pub mod stats;
pub mod storage;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
