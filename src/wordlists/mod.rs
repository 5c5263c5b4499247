//! Italian word lists
//!
//! Lists are embedded into the binary by `build.rs`; custom lists can be
//! loaded from files at runtime.

mod bank;
pub mod loader;

pub use bank::{WordBank, WordBankError};

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/answers.rs"));
    include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
}

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
