//! Closed-alphabet letter types
//!
//! Letters, letter sets and column sets are all fixed-size so that every
//! keyed mapping in the solver is bounded by the 26-letter alphabet or the
//! 5 columns of a word.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Length of every target word
pub const WORD_LENGTH: usize = 5;

/// Number of guess rows on the board
pub const ROWS: usize = 6;

/// A lowercase ASCII letter `a..=z`
///
/// Stored as its alphabet index (0-25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, accepting either case
    ///
    /// Returns `None` for anything outside `a..=z` / `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_clues::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('Q'), Letter::from_char('q'));
    /// assert!(Letter::from_char('3').is_none());
    /// assert!(Letter::from_char('é').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_lowercase() as u8 - b'a'))
        } else {
            None
        }
    }

    /// Alphabet index (0 for 'a', 25 for 'z')
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0 + b'a'
    }

    /// Lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.byte() as char
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Set of letters backed by a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a letter; returns `true` if it was not already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Set of column indices `0..WORD_LENGTH` backed by a bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Columns(u8);

impl Columns {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a column; out-of-range columns are ignored
    pub fn insert(&mut self, col: usize) {
        if col < WORD_LENGTH {
            self.0 |= 1 << col;
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, col: usize) -> bool {
        col < WORD_LENGTH && self.0 & (1 << col) != 0
    }

    /// Columns in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_LENGTH).filter(move |&col| self.contains(col))
    }
}
