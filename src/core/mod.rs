//! Core domain types for clue solving
//!
//! This module contains the board, keyboard and alphabet types with no I/O.
//! Front ends mutate `GridState` and `KeyStates`; the solver reads snapshots.

mod clue;
mod grid;
mod keyboard;
mod letter;

pub use clue::{CellState, ClueError, KeyState, parse_feedback};
pub use grid::{Cell, GridState};
pub use keyboard::{KeyStates, QWERTY_ROWS};
pub use letter::{ALPHABET_SIZE, Columns, Letter, LetterSet, ROWS, WORD_LENGTH};
