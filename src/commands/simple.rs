//! Simple interactive CLI mode
//!
//! Text-based clue entry without TUI: one guess per line, suggestions
//! refreshed after every change.

use super::suggest::{GuessRow, NO_CLUES_MESSAGE, build_board, parse_absent, parse_guess};
use crate::core::{LetterSet, ROWS};
use crate::output::formatters::feedback_to_emoji;
use crate::output::{print_constraints, print_suggestions};
use crate::solver::{Solver, SolverConfig};
use std::io::{self, Write};

/// A single parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(GuessRow),
    Absent(LetterSet),
    Undo,
    New,
    Show,
    Quit,
}

/// Parse one input line
///
/// Accepts `WORD FEEDBACK`, `WORD:FEEDBACK`, `absent LETTERS`, `undo`, `new`,
/// `show` and `quit`.
///
/// # Errors
/// Returns a message describing why the line was not understood.
pub fn parse_command(line: &str) -> Result<SimpleCommand, String> {
    let line = line.trim();
    let lower = line.to_lowercase();

    match lower.as_str() {
        "quit" | "q" | "exit" => return Ok(SimpleCommand::Quit),
        "undo" | "u" => return Ok(SimpleCommand::Undo),
        "new" | "n" | "reset" => return Ok(SimpleCommand::New),
        "show" | "s" | "" => return Ok(SimpleCommand::Show),
        _ => {}
    }

    if let Some(rest) = lower.strip_prefix("absent ") {
        return Ok(SimpleCommand::Absent(parse_absent(rest)));
    }

    let spec = match line.split_once(char::is_whitespace) {
        Some((word, feedback)) => format!("{word}:{}", feedback.trim()),
        None => line.to_string(),
    };

    parse_guess(&spec)
        .map(SimpleCommand::Guess)
        .map_err(|e| e.to_string())
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: AsRef<str>>(
    words: &[S],
    config: SolverConfig,
    top: usize,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Clue Solver - Interactive Mode           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess with its feedback, e.g. 'crane GY---':\n");
    println!("  - Use G/g/🟩 for correct (right letter, right spot)");
    println!("  - Use Y/y/🟨 for present (in the word, wrong spot)");
    println!("  - Use -/_/⬛ for absent (not in the word)");
    println!("  - 'absent xyz' greys out extra keyboard letters\n");
    println!("Commands: 'quit' to exit, 'new' to clear the board, 'undo' to remove the last guess\n");

    let solver = Solver::with_config(words, config);
    let mut rows: Vec<GuessRow> = Vec::new();
    let mut absent = LetterSet::new();

    loop {
        let input = get_user_input(&format!("Guess {}", rows.len() + 1))?;

        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        match command {
            SimpleCommand::Quit => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            SimpleCommand::New => {
                rows.clear();
                absent = LetterSet::new();
                println!("\n🔄 Board cleared!\n");
                continue;
            }
            SimpleCommand::Undo => {
                if rows.pop().is_some() {
                    println!("✓ Undone! {} guesses on the board", rows.len());
                } else {
                    println!("Nothing to undo!\n");
                    continue;
                }
            }
            SimpleCommand::Absent(letters) => {
                for letter in letters.iter() {
                    absent.insert(letter);
                }
            }
            SimpleCommand::Guess(row) => {
                if rows.len() == ROWS {
                    println!("❌ The board is full. Use 'undo' or 'new'.\n");
                    continue;
                }
                rows.push(row);
            }
            SimpleCommand::Show => {}
        }

        let (grid, keys) = build_board(&rows, absent).map_err(|e| e.to_string())?;
        if !grid.has_clues() && !keys.has_clues() {
            println!("{NO_CLUES_MESSAGE}\n");
            continue;
        }

        let solution = solver.solve(&grid, &keys).map_err(|e| e.to_string())?;

        println!("────────────────────────────────────────────────────────────");
        for (word, states) in &rows {
            println!("  {} {}", word.to_uppercase(), feedback_to_emoji(states));
        }
        print_constraints(&solution.constraints);
        let shown = solution.suggestions.len().min(top);
        print_suggestions(&solution.suggestions[..shown], solution.total_matches);
        println!();
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // EOF behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("quit"), Ok(SimpleCommand::Quit));
        assert_eq!(parse_command("  UNDO "), Ok(SimpleCommand::Undo));
        assert_eq!(parse_command("new"), Ok(SimpleCommand::New));
        assert_eq!(parse_command(""), Ok(SimpleCommand::Show));
    }

    #[test]
    fn parse_guess_with_space_or_colon() {
        let spaced = parse_command("crane GY---").unwrap();
        let colon = parse_command("crane:GY---").unwrap();
        assert_eq!(spaced, colon);

        let SimpleCommand::Guess((word, states)) = spaced else {
            panic!("expected a guess");
        };
        assert_eq!(word, "crane");
        assert_eq!(states[1], CellState::Present);
    }

    #[test]
    fn parse_absent_letters() {
        let Ok(SimpleCommand::Absent(letters)) = parse_command("absent xqz") else {
            panic!("expected absent letters");
        };
        assert_eq!(letters.to_string(), "qxz");
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(parse_command("crane GY").is_err());
        assert!(parse_command("cran GY---").is_err());
        assert!(parse_command("hello").is_err());
    }
}
