//! Board of guessed letters and their clue states
//!
//! `GridState` is the explicit state object the front ends mutate; the
//! solver only ever reads a snapshot of it.

use super::clue::{CellState, ClueError};
use super::letter::{Letter, ROWS, WORD_LENGTH};

/// A single cell on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<Letter>,
    pub state: CellState,
}

/// 6×5 board with an active (cursor) cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: [[Cell; WORD_LENGTH]; ROWS],
    active: (usize, usize),
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    /// Empty board with the cursor on the first cell
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell {
                letter: None,
                state: CellState::Empty,
            }; WORD_LENGTH]; ROWS],
            active: (0, 0),
        }
    }

    /// Build a board from `(word, feedback)` rows, top to bottom
    ///
    /// # Errors
    /// Returns `ClueError` if there are more rows than the board holds, or
    /// if a word or feedback string is malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::{CellState, GridState};
    ///
    /// let grid = GridState::from_guesses(&[("crane", "G----")]).unwrap();
    /// assert_eq!(grid.cell(0, 0).unwrap().state, CellState::Correct);
    /// ```
    pub fn from_guesses<W: AsRef<str>, F: AsRef<str>>(
        guesses: &[(W, F)],
    ) -> Result<Self, ClueError> {
        if guesses.len() > ROWS {
            return Err(ClueError::TooManyGuesses(guesses.len()));
        }

        let mut grid = Self::new();
        for (row, (word, feedback)) in guesses.iter().enumerate() {
            let states = super::parse_feedback(feedback.as_ref())?;
            grid.enter_guess(row, word.as_ref(), &states)?;
        }
        Ok(grid)
    }

    /// Fill a row from a guess word and its per-column clues
    ///
    /// Characters outside `a..=z` leave their cell empty instead of failing.
    ///
    /// # Errors
    /// Returns `ClueError::GuessLength` if `word` is not five characters.
    pub fn enter_guess(
        &mut self,
        row: usize,
        word: &str,
        states: &[CellState; WORD_LENGTH],
    ) -> Result<(), ClueError> {
        let chars: Vec<char> = word.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(ClueError::GuessLength(chars.len()));
        }

        for (col, (&c, &state)) in chars.iter().zip(states).enumerate() {
            self.clear_cell(row, col);
            if let Some(letter) = Letter::from_char(c) {
                self.set_letter(row, col, letter);
                self.set_state(row, col, state);
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WORD_LENGTH]> {
        self.cells.iter()
    }

    /// Current cursor position as `(row, col)`
    #[inline]
    #[must_use]
    pub const fn active_cell(&self) -> (usize, usize) {
        self.active
    }

    /// Move the cursor; out-of-range positions are ignored
    pub fn set_active_cell(&mut self, row: usize, col: usize) {
        if row < ROWS && col < WORD_LENGTH {
            self.active = (row, col);
        }
    }

    /// Move the cursor by a delta, clamped to the board
    pub fn move_active(&mut self, d_row: isize, d_col: isize) {
        let (row, col) = self.active;
        let row = row.saturating_add_signed(d_row).min(ROWS - 1);
        let col = col.saturating_add_signed(d_col).min(WORD_LENGTH - 1);
        self.active = (row, col);
    }

    /// Put a letter in a cell; an empty cell becomes filled
    pub fn set_letter(&mut self, row: usize, col: usize, letter: Letter) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.letter = Some(letter);
            if cell.state == CellState::Empty {
                cell.state = CellState::Filled;
            }
        }
    }

    /// Set a cell's state directly
    ///
    /// Setting `Empty` also removes the letter.
    pub fn set_state(&mut self, row: usize, col: usize, state: CellState) {
        if let Some(cell) = self.cell_mut(row, col) {
            cell.state = state;
            if state == CellState::Empty {
                cell.letter = None;
            }
        }
    }

    /// Remove the letter and clue from a cell
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cell_mut(row, col) {
            *cell = Cell::default();
        }
    }

    /// Advance a cell to the next state in the toggle cycle
    ///
    /// Returns the cell's letter (if any) and its new state so the caller can
    /// record the clue on the keyboard.
    pub fn toggle_state(&mut self, row: usize, col: usize) -> Option<(Option<Letter>, CellState)> {
        let cell = self.cell_mut(row, col)?;
        let letter = cell.letter;
        cell.state = cell.state.next();
        if cell.state == CellState::Empty {
            cell.letter = None;
        }
        Some((letter, cell.state))
    }

    /// Type a letter at the cursor and advance within the row
    pub fn type_letter(&mut self, letter: Letter) {
        let (row, col) = self.active;
        self.set_letter(row, col, letter);
        if col < WORD_LENGTH - 1 {
            self.active = (row, col + 1);
        }
    }

    /// Erase at the cursor
    ///
    /// On an empty cell past the first column the cursor steps back and the
    /// previous cell is cleared instead.
    pub fn backspace(&mut self) {
        let (row, col) = self.active;
        let is_empty = self.cells[row][col].letter.is_none();
        if is_empty && col > 0 {
            self.active = (row, col - 1);
            self.clear_cell(row, col - 1);
        } else {
            self.clear_cell(row, col);
        }
    }

    /// Clear every cell and put the cursor back on the first cell
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether any cell holds something other than an empty state
    #[must_use]
    pub fn has_clues(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| cell.state != CellState::Empty)
    }
}
