//! One-shot suggestion command
//!
//! Builds a board from `WORD:FEEDBACK` guesses plus extra absent letters and
//! ranks the matching words.

use crate::core::{
    CellState, ClueError, GridState, KeyState, KeyStates, Letter, LetterSet, ROWS, WORD_LENGTH,
    parse_feedback,
};
use crate::solver::{ConstraintSet, Solver, SolverConfig, Suggestion};

/// Number of suggestions shown by default
pub const DEFAULT_TOP: usize = 10;

/// Message used when the board carries no clues
pub const NO_CLUES_MESSAGE: &str = "Please enter some Wordle clues first!";

/// A guessed word with its per-column feedback
pub type GuessRow = (String, [CellState; WORD_LENGTH]);

/// Configuration for a suggestion run
pub struct SuggestConfig {
    /// Guesses as `WORD:FEEDBACK`, top row first
    pub guesses: Vec<String>,
    /// Letters greyed out on the keyboard
    pub absent: String,
    /// How many suggestions to display
    pub top: usize,
    pub solver: SolverConfig,
}

impl SuggestConfig {
    #[must_use]
    pub fn new(guesses: Vec<String>) -> Self {
        Self {
            guesses,
            absent: String::new(),
            top: DEFAULT_TOP,
            solver: SolverConfig::default(),
        }
    }
}

/// Result of a suggestion run
pub struct SuggestResult {
    pub rows: Vec<GuessRow>,
    pub suggestions: Vec<Suggestion>,
    pub total_matches: usize,
    pub constraints: ConstraintSet,
    pub top: usize,
}

impl SuggestResult {
    /// The suggestions that should be displayed
    #[must_use]
    pub fn top_suggestions(&self) -> &[Suggestion] {
        &self.suggestions[..self.suggestions.len().min(self.top)]
    }
}

/// Parse a `WORD:FEEDBACK` guess such as `crane:GY---`
///
/// # Errors
/// Returns `ClueError` if the separator is missing or either half is malformed.
pub fn parse_guess(spec: &str) -> Result<GuessRow, ClueError> {
    let (word, feedback) = spec
        .split_once([':', '='])
        .ok_or_else(|| ClueError::GuessFormat(spec.to_string()))?;

    let word = word.trim().to_lowercase();
    let letters = word.chars().count();
    if letters != WORD_LENGTH {
        return Err(ClueError::GuessLength(letters));
    }

    Ok((word, parse_feedback(feedback)?))
}

/// Parse a run of letters marked absent on the keyboard
///
/// Non-letters are skipped.
#[must_use]
pub fn parse_absent(letters: &str) -> LetterSet {
    letters.chars().filter_map(Letter::from_char).collect()
}

/// Lay guesses onto a fresh board and mirror their clues onto the keyboard
///
/// # Errors
/// Returns `ClueError` if there are more guesses than rows or a guess word
/// has the wrong length.
pub fn build_board(
    rows: &[GuessRow],
    absent: LetterSet,
) -> Result<(GridState, KeyStates), ClueError> {
    if rows.len() > ROWS {
        return Err(ClueError::TooManyGuesses(rows.len()));
    }

    let mut grid = GridState::new();
    let mut keys = KeyStates::new();

    for (row, (word, states)) in rows.iter().enumerate() {
        grid.enter_guess(row, word, states)?;
        for (letter, state) in word.chars().filter_map(Letter::from_char).zip(states) {
            keys.record(letter, *state);
        }
    }

    for letter in absent.iter() {
        if keys.get(letter) == KeyState::Default {
            keys.set(letter, KeyState::Absent);
        }
    }

    Ok((grid, keys))
}

/// Rank the words consistent with the configured guesses
///
/// # Errors
///
/// Returns an error if:
/// - A guess is malformed
/// - No clues were given at all
/// - The word list is empty
pub fn suggest<S: AsRef<str>>(
    config: SuggestConfig,
    words: &[S],
) -> Result<SuggestResult, String> {
    let rows = config
        .guesses
        .iter()
        .map(|spec| parse_guess(spec))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Invalid guess: {e}"))?;

    let (grid, keys) =
        build_board(&rows, parse_absent(&config.absent)).map_err(|e| e.to_string())?;

    if !grid.has_clues() && !keys.has_clues() {
        return Err(NO_CLUES_MESSAGE.to_string());
    }

    let solver = Solver::with_config(words, config.solver);
    let solution = solver.solve(&grid, &keys).map_err(|e| e.to_string())?;

    Ok(SuggestResult {
        rows,
        suggestions: solution.suggestions,
        total_matches: solution.total_matches,
        constraints: solution.constraints,
        top: config.top,
    })
}
