//! Positional letter-frequency scoring
//!
//! Ranks candidates by how common each of their letters is at its position
//! among the candidates themselves, with a mild penalty for repeated letters.
//!
//! # Formula
//! score = Σᵢ freq[i][word[i]] × (1 − 0.2 × (1 − unique / len))
//!
//! probability = score / len × 100

use rustc_hash::FxHashSet;
use tracing::info;

/// Maximum number of candidates scored per solve
pub const DEFAULT_SCORE_CAP: usize = 1000;

/// Weight of the repeated-letter penalty
const DUPLICATE_WEIGHT: f64 = 0.2;

/// A candidate with its relative ranking score
///
/// `probability` is a 0-100 display score, not a calibrated probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    pub probability: f64,
}

/// Per-position byte counts over the scored candidates
struct PositionFrequencies {
    counts: Vec<[u32; 256]>,
    total: usize,
}

impl PositionFrequencies {
    fn from_words(words: &[&str]) -> Self {
        let width = words.iter().map(|w| w.len()).max().unwrap_or(0);
        let mut counts = vec![[0u32; 256]; width];

        for word in words {
            for (table, &b) in counts.iter_mut().zip(word.as_bytes()) {
                table[usize::from(b)] += 1;
            }
        }

        Self {
            counts,
            total: words.len(),
        }
    }

    /// Fraction of scored words with byte `b` at `position`
    fn frequency(&self, position: usize, b: u8) -> f64 {
        f64::from(self.counts[position][usize::from(b)]) / self.total as f64
    }
}

/// Score and rank candidates, highest probability first
///
/// Only the first `cap` candidates (in the given order) are scored; the
/// rest are dropped. Ties keep their input order.
///
/// # Examples
/// ```
/// use wordle_clues::solver::score_words;
///
/// let ranked = score_words(&["crane", "crate", "slate"], 1000);
/// assert_eq!(ranked[0].word, "crate");
/// assert!(ranked.windows(2).all(|w| w[0].probability >= w[1].probability));
/// ```
#[must_use]
pub fn score_words<S: AsRef<str>>(words: &[S], cap: usize) -> Vec<Suggestion> {
    if words.is_empty() {
        return Vec::new();
    }

    if words.len() > cap {
        info!(
            "Limiting scoring to first {cap} of {} matching words",
            words.len()
        );
    }

    let scored: Vec<&str> = words.iter().take(cap).map(AsRef::as_ref).collect();
    if scored.is_empty() {
        return Vec::new();
    }

    let frequencies = PositionFrequencies::from_words(&scored);

    let mut suggestions: Vec<Suggestion> = scored
        .iter()
        .map(|&word| Suggestion {
            word: word.to_string(),
            probability: word_probability(word, &frequencies),
        })
        .collect();

    // Stable sort keeps input order for equal scores
    suggestions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    suggestions
}

fn word_probability(word: &str, frequencies: &PositionFrequencies) -> f64 {
    let len = word.len();
    if len == 0 {
        return 0.0;
    }

    let raw: f64 = word
        .bytes()
        .enumerate()
        .map(|(i, b)| frequencies.frequency(i, b))
        .sum();

    let unique = word.bytes().collect::<FxHashSet<u8>>().len();
    let duplicate_penalty = 1.0 - unique as f64 / len as f64;
    let score = raw * (1.0 - duplicate_penalty * DUPLICATE_WEIGHT);

    score / len as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probability_of(ranked: &[Suggestion], word: &str) -> f64 {
        ranked
            .iter()
            .find(|s| s.word == word)
            .map(|s| s.probability)
            .unwrap()
    }

    #[test]
    fn empty_input_scores_nothing() {
        let words: [&str; 0] = [];
        assert!(score_words(&words, DEFAULT_SCORE_CAP).is_empty());
    }

    #[test]
    fn single_word_scores_one_hundred() {
        let ranked = score_words(&["crane"], DEFAULT_SCORE_CAP);
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].probability - 100.0).abs() < 1e-9);
    }

    #[test]
    fn positional_frequencies_drive_ranking() {
        // Column frequencies: c 2/3, s 1/3 | r 2/3, l 1/3 | a 3/3 | n 1/3, t 2/3 | e 3/3
        let ranked = score_words(&["crane", "crate", "slate"], DEFAULT_SCORE_CAP);

        let crate_p = probability_of(&ranked, "crate");
        let crane_p = probability_of(&ranked, "crane");
        let slate_p = probability_of(&ranked, "slate");

        let expected = (2.0 / 3.0 + 2.0 / 3.0 + 1.0 + 2.0 / 3.0 + 1.0) / 5.0 * 100.0;
        assert!((crate_p - expected).abs() < 1e-9);
        assert!(crate_p > crane_p);
        assert!(crane_p > slate_p);
        assert_eq!(ranked[0].word, "crate");
    }

    #[test]
    fn repeated_letters_are_penalized() {
        // Identical positional frequencies, but "eerie" repeats 'e'
        let ranked = score_words(&["eerie", "abcde"], DEFAULT_SCORE_CAP);
        let unique = probability_of(&ranked, "abcde");
        let repeated = probability_of(&ranked, "eerie");

        // unique letters 3/5 -> penalty 0.4 -> score × 0.92
        assert!((repeated - unique * 0.92).abs() < 1e-9);
        assert_eq!(ranked[0].word, "abcde");
    }

    #[test]
    fn all_identical_letters_lose_sixteen_percent() {
        let ranked = score_words(&["aaaaa"], DEFAULT_SCORE_CAP);
        // unique 1/5 -> penalty 0.8 -> × 0.84
        assert!((ranked[0].probability - 84.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = score_words(&["abcde", "fghij", "klmno"], DEFAULT_SCORE_CAP);
        let order: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(order, vec!["abcde", "fghij", "klmno"]);
    }

    #[test]
    fn cap_limits_scored_words() {
        let words: Vec<String> = (0..1500)
            .map(|i| {
                let a = (b'a' + (i % 26) as u8) as char;
                let b = (b'a' + (i / 26 % 26) as u8) as char;
                let c = (b'a' + (i / 676 % 26) as u8) as char;
                format!("{a}{b}{c}xy")
            })
            .collect();

        let ranked = score_words(&words, DEFAULT_SCORE_CAP);
        assert_eq!(ranked.len(), DEFAULT_SCORE_CAP);

        let first_thousand: FxHashSet<&str> =
            words[..1000].iter().map(String::as_str).collect();
        assert!(
            ranked
                .iter()
                .all(|s| first_thousand.contains(s.word.as_str()))
        );
    }

    #[test]
    fn output_is_sorted_descending() {
        let words = ["crane", "crate", "slate", "stare", "trace", "grate", "eerie"];
        let ranked = score_words(&words, DEFAULT_SCORE_CAP);
        assert_eq!(ranked.len(), words.len());
        assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].probability >= pair[1].probability)
        );
    }

    #[test]
    fn probabilities_stay_in_range() {
        let words = ["crane", "crate", "slate", "aaaaa"];
        for suggestion in score_words(&words, DEFAULT_SCORE_CAP) {
            assert!((0.0..=100.0).contains(&suggestion.probability));
        }
    }
}
