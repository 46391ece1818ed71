//! On-screen keyboard letter states

use super::clue::{CellState, KeyState};
use super::letter::{ALPHABET_SIZE, Letter};

/// Keyboard rows as displayed, top to bottom
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Strongest evidence per letter, keyed by the closed alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStates([KeyState; ALPHABET_SIZE]);

impl KeyStates {
    #[must_use]
    pub const fn new() -> Self {
        Self([KeyState::Default; ALPHABET_SIZE])
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> KeyState {
        self.0[letter.index()]
    }

    /// Overwrite a key's state unconditionally
    pub fn set(&mut self, letter: Letter, state: KeyState) {
        self.0[letter.index()] = state;
    }

    /// Record a cell clue for a letter, keeping the strongest evidence
    ///
    /// `Correct` always wins, `Present` never downgrades `Correct`, and
    /// `Absent` only sticks to a key that has no positive evidence.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::{CellState, KeyState, KeyStates, Letter};
    ///
    /// let e = Letter::from_char('e').unwrap();
    /// let mut keys = KeyStates::new();
    /// keys.record(e, CellState::Present);
    /// keys.record(e, CellState::Absent);
    /// assert_eq!(keys.get(e), KeyState::Present);
    /// ```
    pub fn record(&mut self, letter: Letter, clue: CellState) {
        let current = self.get(letter);
        let next = match clue {
            CellState::Correct => KeyState::Correct,
            CellState::Present if current != KeyState::Correct => KeyState::Present,
            CellState::Absent if matches!(current, KeyState::Default | KeyState::Absent) => {
                KeyState::Absent
            }
            _ => current,
        };
        self.set(letter, next);
    }

    /// Return every key to `Default`
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `(letter, state)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, KeyState)> + '_ {
        Letter::all().map(|letter| (letter, self.get(letter)))
    }

    /// Whether any key carries evidence
    #[must_use]
    pub fn has_clues(&self) -> bool {
        self.0.iter().any(|&state| state != KeyState::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn starts_all_default() {
        let keys = KeyStates::new();
        assert!(!keys.has_clues());
        assert_eq!(keys.iter().count(), ALPHABET_SIZE);
        assert!(keys.iter().all(|(_, s)| s == KeyState::Default));
    }

    #[test]
    fn correct_always_wins() {
        let mut keys = KeyStates::new();
        keys.record(letter('a'), CellState::Absent);
        keys.record(letter('a'), CellState::Correct);
        assert_eq!(keys.get(letter('a')), KeyState::Correct);

        keys.record(letter('a'), CellState::Present);
        keys.record(letter('a'), CellState::Absent);
        assert_eq!(keys.get(letter('a')), KeyState::Correct);
    }

    #[test]
    fn present_upgrades_absent() {
        let mut keys = KeyStates::new();
        keys.record(letter('r'), CellState::Absent);
        keys.record(letter('r'), CellState::Present);
        assert_eq!(keys.get(letter('r')), KeyState::Present);
    }

    #[test]
    fn non_clue_states_leave_key_alone() {
        let mut keys = KeyStates::new();
        keys.record(letter('z'), CellState::Filled);
        keys.record(letter('z'), CellState::Empty);
        assert_eq!(keys.get(letter('z')), KeyState::Default);

        keys.record(letter('z'), CellState::Absent);
        keys.record(letter('z'), CellState::Empty);
        assert_eq!(keys.get(letter('z')), KeyState::Absent);
    }

    #[test]
    fn qwerty_layout_covers_alphabet() {
        let mut seen: Vec<char> = QWERTY_ROWS.iter().flat_map(|row| row.chars()).collect();
        seen.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(seen, alphabet);
    }

    #[test]
    fn reset_returns_to_default() {
        let mut keys = KeyStates::new();
        keys.set(letter('q'), KeyState::Absent);
        assert!(keys.has_clues());
        keys.reset();
        assert!(!keys.has_clues());
    }
}
