//! Main clue solver interface

use super::constraints::ConstraintSet;
use super::filter::filter_words;
use super::scorer::{DEFAULT_SCORE_CAP, Suggestion, score_words};
use crate::core::{GridState, KeyStates};
use std::fmt;
use tracing::debug;

/// Tunables for a solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// How many matching words are scored at most
    pub score_cap: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            score_cap: DEFAULT_SCORE_CAP,
        }
    }
}

/// Error type for solving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The word source has not been loaded or is empty
    WordSourceEmpty,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordSourceEmpty => write!(f, "Word list is empty or not loaded yet"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Outcome of one solve call
#[derive(Debug, Clone)]
pub struct Solution {
    /// Ranked suggestions (at most `score_cap` entries)
    pub suggestions: Vec<Suggestion>,
    /// Number of words that passed the filter, before the scoring cap
    pub total_matches: usize,
    /// Constraints the suggestions were filtered with
    pub constraints: ConstraintSet,
}

/// Clue solver over a static word source
///
/// Holds no state between calls: every `solve` is a pure function of the
/// snapshots it is given.
pub struct Solver<'a, S> {
    words: &'a [S],
    config: SolverConfig,
}

impl<'a, S: AsRef<str>> Solver<'a, S> {
    /// Create a solver with the default scoring cap
    #[must_use]
    pub fn new(words: &'a [S]) -> Self {
        Self::with_config(words, SolverConfig::default())
    }

    #[must_use]
    pub const fn with_config(words: &'a [S], config: SolverConfig) -> Self {
        Self { words, config }
    }

    /// Whether the word source is loaded
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        !self.words.is_empty()
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Rank the words consistent with a board and keyboard snapshot
    ///
    /// With no clues at all every five-letter word matches; callers that
    /// want to prompt for clues instead should check `has_clues` first.
    ///
    /// # Errors
    /// Returns `SolveError::WordSourceEmpty` if the word source is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::{GridState, KeyStates};
    /// use wordle_clues::solver::Solver;
    ///
    /// let words = ["crane", "slate", "stare", "crate"];
    /// let solver = Solver::new(&words);
    ///
    /// let grid = GridState::from_guesses(&[("trace", "-GGYG")]).unwrap();
    /// let solution = solver.solve(&grid, &KeyStates::new()).unwrap();
    ///
    /// let found: Vec<&str> = solution.suggestions.iter().map(|s| s.word.as_str()).collect();
    /// assert_eq!(found, vec!["crane"]);
    /// ```
    pub fn solve(&self, grid: &GridState, keys: &KeyStates) -> Result<Solution, SolveError> {
        if !self.is_ready() {
            return Err(SolveError::WordSourceEmpty);
        }

        let constraints = ConstraintSet::extract(grid, keys);
        let matching = filter_words(self.words, &constraints);
        let suggestions = score_words(&matching, self.config.score_cap);

        debug!(
            matches = matching.len(),
            ranked = suggestions.len(),
            "solve complete"
        );

        Ok(Solution {
            suggestions,
            total_matches: matching.len(),
            constraints,
        })
    }
}
