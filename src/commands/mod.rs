//! Command implementations

pub mod report;
pub mod session;
pub mod simple;

pub use report::{evaluate, saved_share, saved_stats, today_line};
pub use session::{save_game, saved_data, start_game, start_game_on};
pub use simple::run_simple;
