//! Clue solving pipeline
//!
//! Board and keyboard snapshots flow through constraint extraction, word
//! filtering and positional-frequency scoring to a ranked suggestion list.

mod constraints;
mod engine;
mod filter;
mod scorer;

pub use constraints::ConstraintSet;
pub use engine::{Solution, SolveError, Solver, SolverConfig};
pub use filter::filter_words;
pub use scorer::{DEFAULT_SCORE_CAP, Suggestion, score_words};
