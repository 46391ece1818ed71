//! Display functions for command results

use super::formatters::{
    correct_mask, feedback_to_emoji, match_summary, present_summary, probability_bar,
};
use crate::commands::SuggestResult;
use crate::solver::{ConstraintSet, Suggestion};
use colored::Colorize;

/// Print the result of a suggestion run
pub fn print_suggest_result(result: &SuggestResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    for (word, states) in &result.rows {
        println!("  {} {}", word.to_uppercase().bold(), feedback_to_emoji(states));
    }
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        print_constraints(&result.constraints);
    }

    print_suggestions(result.top_suggestions(), result.total_matches);
}

/// Print the derived constraint set
pub fn print_constraints(constraints: &ConstraintSet) {
    println!("\n🔎 {}", "Constraints:".bright_cyan().bold());
    println!("   Pinned:   {}", correct_mask(constraints).green());

    let present = present_summary(constraints);
    if !present.is_empty() {
        println!("   Present:  {}", present.yellow());
    }

    let absent = constraints.absent_letters();
    if !absent.is_empty() {
        println!("   Absent:   {}", absent.to_string().bright_black());
    }
}

/// Print ranked suggestions with their scores
pub fn print_suggestions(suggestions: &[Suggestion], total_matches: usize) {
    println!();
    let summary = match_summary(total_matches);
    if total_matches == 0 {
        println!("{}", format!("❌ {summary}").red().bold());
        return;
    }

    println!("{}", format!("✅ {summary}").green().bold());
    println!();

    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "  {:>2}. {}  {} {}",
            (i + 1).to_string().bright_black(),
            suggestion.word.to_uppercase().bright_yellow().bold(),
            probability_bar(suggestion.probability, 20).green(),
            format!("{:5.1}%", suggestion.probability).bright_white()
        );
    }
}
