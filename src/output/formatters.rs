//! Formatting utilities for terminal output

use crate::core::{CellState, WORD_LENGTH};
use crate::solver::ConstraintSet;

/// Format a row of clue states as emoji
#[must_use]
pub fn feedback_to_emoji(states: &[CellState; WORD_LENGTH]) -> String {
    states
        .iter()
        .map(|state| match state {
            CellState::Correct => '🟩',
            CellState::Present => '🟨',
            CellState::Absent => '⬛',
            CellState::Empty | CellState::Filled => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a 0-100 suggestion score
#[must_use]
pub fn probability_bar(probability: f64, width: usize) -> String {
    create_progress_bar(probability, 100.0, width)
}

/// Headline for a solve, chosen from the match count rather than from how
/// many suggestions are displayed
#[must_use]
pub fn match_summary(total_matches: usize) -> String {
    if total_matches == 0 {
        "No matching words found. Try adjusting your clues.".to_string()
    } else {
        format!("Found {total_matches} possible words")
    }
}

/// Pinned letters as a five-column mask, e.g. `c__n_`
#[must_use]
pub fn correct_mask(constraints: &ConstraintSet) -> String {
    (0..WORD_LENGTH)
        .map(|col| constraints.correct_at(col).map_or('_', |l| l.to_char()))
        .collect()
}

/// Present letters with the 1-based columns they are excluded from,
/// e.g. `r(not 2) e(not 1,4)`
#[must_use]
pub fn present_summary(constraints: &ConstraintSet) -> String {
    constraints
        .present_letters()
        .map(|(letter, cols)| {
            let excluded: Vec<String> = cols.iter().map(|c| (c + 1).to_string()).collect();
            format!("{letter}(not {})", excluded.join(","))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridState, KeyStates};

    #[test]
    fn feedback_to_emoji_mixed() {
        let states = [
            CellState::Correct,
            CellState::Present,
            CellState::Absent,
            CellState::Filled,
            CellState::Empty,
        ];
        assert_eq!(feedback_to_emoji(&states), "🟩🟨⬛⬜⬜");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = probability_bar(50.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn match_summary_follows_match_count() {
        assert_eq!(
            match_summary(0),
            "No matching words found. Try adjusting your clues."
        );
        // Nothing displayed (e.g. a top count of zero) still reports matches
        assert_eq!(match_summary(2), "Found 2 possible words");
    }

    #[test]
    fn constraint_summaries() {
        let grid = GridState::from_guesses(&[("crane", "G--YY"), ("steal", "--Y--")]).unwrap();
        let constraints = ConstraintSet::extract(&grid, &KeyStates::new());

        assert_eq!(correct_mask(&constraints), "c____");
        assert_eq!(present_summary(&constraints), "e(not 3,5) n(not 4)");
    }
}
