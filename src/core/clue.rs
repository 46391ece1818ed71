//! Clue states for grid cells and keyboard keys
//!
//! Also parses compact feedback strings such as `"GY-G-"` or `"🟩🟨⬜🟩⬜"`
//! into per-column clue states.

use super::letter::WORD_LENGTH;
use std::fmt;

/// State of a single grid cell
///
/// Cells cycle `Empty → Filled → Correct → Present → Absent → Empty`
/// when toggled. Only `Correct`, `Present` and `Absent` carry a clue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Filled,
    Correct,
    Present,
    Absent,
}

impl CellState {
    /// Next state in the toggle cycle
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Empty => Self::Filled,
            Self::Filled => Self::Correct,
            Self::Correct => Self::Present,
            Self::Present => Self::Absent,
            Self::Absent => Self::Empty,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/'x'/'X'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_feedback_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'x' | 'X' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Strongest evidence seen for a letter on the on-screen keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyState {
    #[default]
    Default,
    Correct,
    Present,
    Absent,
}

/// Error type for malformed clue input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueError {
    /// Feedback must have exactly one symbol per column
    FeedbackLength(usize),
    /// Feedback contained a symbol that is not a clue
    FeedbackSymbol(char),
    /// Guess word must have exactly one letter per column
    GuessLength(usize),
    /// Guess spec was not of the form `WORD:FEEDBACK`
    GuessFormat(String),
    /// More guesses than grid rows
    TooManyGuesses(usize),
}

impl fmt::Display for ClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FeedbackLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::FeedbackSymbol(c) => {
                write!(f, "Invalid feedback symbol '{c}' (use G/Y/- or 🟩🟨⬜)")
            }
            Self::GuessLength(len) => {
                write!(f, "Guess must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::GuessFormat(spec) => {
                write!(f, "Expected WORD:FEEDBACK (e.g. crane:GY---), got '{spec}'")
            }
            Self::TooManyGuesses(count) => {
                write!(f, "At most {} guesses fit on the board, got {count}", super::ROWS)
            }
        }
    }
}

impl std::error::Error for ClueError {}

/// Parse a feedback string into per-column clue states
///
/// # Errors
/// Returns `ClueError` if the string does not have exactly five symbols or
/// contains a symbol that is not a recognized clue.
///
/// # Examples
/// ```
/// use wordle_clues::core::{CellState, parse_feedback};
///
/// let row = parse_feedback("GY-g_").unwrap();
/// assert_eq!(row[0], CellState::Correct);
/// assert_eq!(row[1], CellState::Present);
/// assert_eq!(row[2], CellState::Absent);
/// assert_eq!(parse_feedback("🟩🟨⬜🟩⬜").unwrap()[3], CellState::Correct);
/// assert!(parse_feedback("GGG").is_err());
/// ```
pub fn parse_feedback(s: &str) -> Result<[CellState; WORD_LENGTH], ClueError> {
    let symbols: Vec<char> = s.trim().chars().collect();

    if symbols.len() != WORD_LENGTH {
        return Err(ClueError::FeedbackLength(symbols.len()));
    }

    let mut row = [CellState::Empty; WORD_LENGTH];
    for (slot, &c) in row.iter_mut().zip(&symbols) {
        *slot = CellState::from_feedback_char(c).ok_or(ClueError::FeedbackSymbol(c))?;
    }

    Ok(row)
}
