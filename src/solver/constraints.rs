//! Constraint extraction from board and keyboard clues
//!
//! Clues are accumulated in a single pass: grid rows top to bottom, each row
//! left to right, then the keyboard in alphabetical order. An absent clue is
//! only recorded if the letter is not already known to be in the word at
//! that moment; later discoveries never remove an earlier absence.

use crate::core::{
    ALPHABET_SIZE, CellState, Columns, GridState, KeyState, KeyStates, Letter, LetterSet,
    WORD_LENGTH,
};
use tracing::debug;

/// Normalized constraints derived from one board/keyboard snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    correct: [Option<Letter>; WORD_LENGTH],
    present: [Option<Columns>; ALPHABET_SIZE],
    absent: LetterSet,
}

impl ConstraintSet {
    /// Derive constraints from a board and keyboard snapshot
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::{GridState, KeyStates, Letter};
    /// use wordle_clues::solver::ConstraintSet;
    ///
    /// let grid = GridState::from_guesses(&[("crane", "GY---")]).unwrap();
    /// let constraints = ConstraintSet::extract(&grid, &KeyStates::new());
    ///
    /// assert_eq!(constraints.correct_at(0), Letter::from_char('c'));
    /// assert_eq!(constraints.absent_letters().to_string(), "aen");
    /// ```
    #[must_use]
    pub fn extract(grid: &GridState, keys: &KeyStates) -> Self {
        let mut constraints = Self::default();

        for row in grid.rows() {
            for (col, cell) in row.iter().enumerate() {
                let Some(letter) = cell.letter else {
                    continue;
                };

                match cell.state {
                    CellState::Correct => constraints.correct[col] = Some(letter),
                    CellState::Present => constraints.present[letter.index()]
                        .get_or_insert_with(Columns::new)
                        .insert(col),
                    CellState::Absent => constraints.mark_absent(letter),
                    CellState::Empty | CellState::Filled => {}
                }
            }
        }

        for (letter, state) in keys.iter() {
            if state == KeyState::Absent {
                constraints.mark_absent(letter);
            }
        }

        debug!(
            correct = constraints.correct_positions().count(),
            present = constraints.present_letters().count(),
            absent = %constraints.absent,
            "extracted constraints"
        );

        constraints
    }

    fn mark_absent(&mut self, letter: Letter) {
        if !self.is_known_in_word(letter) {
            self.absent.insert(letter);
        }
    }

    /// Whether the letter is pinned to a column or known to be present
    #[must_use]
    pub fn is_known_in_word(&self, letter: Letter) -> bool {
        self.correct.contains(&Some(letter)) || self.present[letter.index()].is_some()
    }

    /// Letter required at a column, if any
    #[must_use]
    pub fn correct_at(&self, col: usize) -> Option<Letter> {
        self.correct.get(col).copied().flatten()
    }

    /// `(column, letter)` pairs for every pinned column
    pub fn correct_positions(&self) -> impl Iterator<Item = (usize, Letter)> + '_ {
        self.correct
            .iter()
            .enumerate()
            .filter_map(|(col, letter)| letter.map(|l| (col, l)))
    }

    /// `(letter, excluded columns)` for every letter known to be in the word
    pub fn present_letters(&self) -> impl Iterator<Item = (Letter, Columns)> + '_ {
        Letter::all().filter_map(|letter| self.present[letter.index()].map(|cols| (letter, cols)))
    }

    /// Letters ruled out of the word
    #[must_use]
    pub const fn absent_letters(&self) -> LetterSet {
        self.absent
    }

    /// Whether no clue contributed anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct.iter().all(Option::is_none)
            && self.present.iter().all(Option::is_none)
            && self.absent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn extract(guesses: &[(&str, &str)]) -> ConstraintSet {
        let grid = GridState::from_guesses(guesses).unwrap();
        ConstraintSet::extract(&grid, &KeyStates::new())
    }

    #[test]
    fn empty_board_has_no_constraints() {
        let constraints = ConstraintSet::extract(&GridState::new(), &KeyStates::new());
        assert!(constraints.is_empty());
    }

    #[test]
    fn filled_cells_carry_no_clue() {
        let mut grid = GridState::new();
        grid.type_letter(letter('a'));
        grid.type_letter(letter('b'));
        let constraints = ConstraintSet::extract(&grid, &KeyStates::new());
        assert!(constraints.is_empty());
    }

    #[test]
    fn each_clue_kind_is_recorded() {
        let constraints = extract(&[("crane", "GY---")]);

        assert_eq!(constraints.correct_at(0), Some(letter('c')));
        assert_eq!(
            constraints.present_letters().collect::<Vec<_>>(),
            vec![(letter('r'), {
                let mut cols = Columns::new();
                cols.insert(1);
                cols
            })]
        );
        assert_eq!(constraints.absent_letters().to_string(), "aen");
    }

    #[test]
    fn present_columns_accumulate_across_rows() {
        let constraints = extract(&[("earth", "Y----"), ("steal", "--Y--")]);

        let (l, cols) = constraints.present_letters().next().unwrap();
        assert_eq!(l, letter('e'));
        assert_eq!(cols.iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn correct_column_is_last_write_wins() {
        let constraints = extract(&[("crane", "G----"), ("brine", "G----")]);
        assert_eq!(constraints.correct_at(0), Some(letter('b')));
    }

    #[test]
    fn absent_after_correct_is_not_recorded() {
        // Second 'e' absent while first 'e' is already pinned
        let constraints = extract(&[("eerie", "G---x")]);
        assert_eq!(constraints.correct_at(0), Some(letter('e')));
        assert!(!constraints.absent_letters().contains(letter('e')));
    }

    #[test]
    fn absent_before_present_is_not_retracted() {
        // 'e' is marked absent at column 1 before the present clue at column 4
        let constraints = extract(&[("geese", "-x--Y")]);
        assert!(constraints.absent_letters().contains(letter('e')));
        assert!(constraints.is_known_in_word(letter('e')));
    }

    #[test]
    fn keyboard_absent_respects_known_letters() {
        let grid = GridState::from_guesses(&[("crane", "GY---")]).unwrap();
        let mut keys = KeyStates::new();
        keys.set(letter('c'), KeyState::Absent);
        keys.set(letter('r'), KeyState::Absent);
        keys.set(letter('z'), KeyState::Absent);
        keys.set(letter('q'), KeyState::Present);

        let constraints = ConstraintSet::extract(&grid, &keys);
        let absent = constraints.absent_letters();
        assert!(!absent.contains(letter('c')));
        assert!(!absent.contains(letter('r')));
        assert!(absent.contains(letter('z')));
        assert!(!absent.contains(letter('q')));
    }

    #[test]
    fn keyboard_alone_yields_absent_letters() {
        let mut keys = KeyStates::new();
        keys.set(letter('x'), KeyState::Absent);
        let constraints = ConstraintSet::extract(&GridState::new(), &keys);
        assert_eq!(constraints.absent_letters().to_string(), "x");
        assert_eq!(constraints.correct_positions().count(), 0);
    }
}
