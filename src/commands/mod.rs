//! Command implementations

pub mod simple;
pub mod suggest;

pub use simple::{SimpleCommand, parse_command, run_simple};
pub use suggest::{
    DEFAULT_TOP, GuessRow, NO_CLUES_MESSAGE, SuggestConfig, SuggestResult, build_board,
    parse_absent, parse_guess, suggest,
};
