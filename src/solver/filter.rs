//! Candidate filtering against a constraint set
//!
//! Clues only ever name the letters `a..=z`, so candidates are held to the
//! same closed alphabet: a word passes only if it is exactly five ASCII
//! bytes. Words with accented or other non-ASCII letters (e.g. "naïve")
//! never match, even with no clues at all.

use super::constraints::ConstraintSet;
use crate::core::WORD_LENGTH;
use tracing::debug;

impl ConstraintSet {
    /// Check whether a word satisfies every constraint
    ///
    /// A word must be five ASCII bytes long, carry every pinned letter in its
    /// column, contain every present letter outside its excluded columns, and
    /// avoid absent letters. An absent letter is still allowed when the word
    /// also has it in a column pinned to that letter, which covers guesses
    /// where only one copy of a doubled letter was correct.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        if bytes.len() != WORD_LENGTH || !word.is_ascii() {
            return false;
        }

        if self
            .correct_positions()
            .any(|(col, letter)| bytes[col] != letter.byte())
        {
            return false;
        }

        for (letter, excluded) in self.present_letters() {
            let b = letter.byte();
            if !bytes.contains(&b) || excluded.iter().any(|col| bytes[col] == b) {
                return false;
            }
        }

        self.absent_letters().iter().all(|letter| {
            let b = letter.byte();
            !bytes.contains(&b)
                || self
                    .correct_positions()
                    .any(|(pos, pinned)| pinned == letter && bytes[pos] == b)
        })
    }
}

/// Keep the words that satisfy the constraints, in their original order
///
/// # Examples
/// ```
/// use wordle_clues::core::{GridState, KeyStates};
/// use wordle_clues::solver::{ConstraintSet, filter_words};
///
/// let grid = GridState::from_guesses(&[("crane", "GGGG-")]).unwrap();
/// let constraints = ConstraintSet::extract(&grid, &KeyStates::new());
///
/// let words = ["crank", "crane", "cranky", "drank"];
/// assert_eq!(filter_words(&words, &constraints), vec!["crank"]);
/// ```
pub fn filter_words<'w, S: AsRef<str>>(
    words: &'w [S],
    constraints: &ConstraintSet,
) -> Vec<&'w str> {
    let matching: Vec<&str> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| constraints.matches(word))
        .collect();

    debug!(
        total = words.len(),
        matching = matching.len(),
        "filtered word source"
    );

    matching
}
