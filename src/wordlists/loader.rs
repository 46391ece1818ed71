//! Word list loading utilities
//!
//! Every source is normalized the same way: lines are trimmed and
//! lowercased, blank lines dropped, and repeats removed keeping the first
//! occurrence. Lengths are not checked here; the filter rejects words that
//! are not five letters.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Load words from a newline-delimited file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_clues::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = normalize_words(content.lines());

    info!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use wordle_clues::wordlists::loader::words_from_slice;
/// use wordle_clues::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize_words(slice.iter().copied())
}

/// Trim, lowercase, drop blanks and deduplicate, preserving order
pub fn normalize_words<'s, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();

    lines
        .into_iter()
        .filter_map(|line| {
            let word = line.trim().to_lowercase();
            if word.is_empty() || !seen.insert(word.clone()) {
                None
            } else {
                Some(word)
            }
        })
        .collect()
}
