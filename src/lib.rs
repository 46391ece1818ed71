//! Wordle Clue Solver
//!
//! Turns the letters and colors from a Wordle board into a ranked list of
//! words that still fit, scored by positional letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clues::core::{GridState, KeyStates};
//! use wordle_clues::solver::Solver;
//! use wordle_clues::wordlists::{WORDS, words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let solver = Solver::new(&words);
//!
//! // 'c' pinned, 'r' elsewhere, 'a', 'n', 'e' ruled out
//! let grid = GridState::from_guesses(&[("crane", "GY---")]).unwrap();
//! let solution = solver.solve(&grid, &KeyStates::new()).unwrap();
//!
//! for suggestion in solution.suggestions.iter().take(3) {
//!     println!("{} {:.1}%", suggestion.word, suggestion.probability);
//! }
//! ```

// Core domain types
pub mod core;

// Constraint extraction, filtering and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
