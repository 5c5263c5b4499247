//! Terminal output formatting
//!
//! Coloured boards, keyboards and statistics for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation, print_keyboard, print_stats, tile};
