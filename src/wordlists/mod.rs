//! Word source for clue solving
//!
//! Provides the embedded default list and loading of custom lists.

pub mod loader;

// Generated by build.rs from data/words.txt
include!(concat!(env!("OUT_DIR"), "/words.rs"));

pub use loader::{load_from_file, normalize_words, words_from_slice};
