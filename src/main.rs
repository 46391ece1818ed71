//! Wordle Clue Solver - CLI
//!
//! Enter board clues in a TUI, line by line, or as arguments and get ranked
//! answer suggestions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use wordle_clues::{
    commands::{DEFAULT_TOP, SuggestConfig, run_simple, suggest},
    logging,
    output::print_suggest_result,
    solver::{DEFAULT_SCORE_CAP, SolverConfig},
    wordlists::{WORDS, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_clues",
    about = "Suggest Wordle answers from grid and keyboard clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of suggestions to display
    #[arg(
        short = 't',
        long,
        global = true,
        default_value_t = DEFAULT_TOP,
        value_parser = positive_count
    )]
    top: usize,

    /// Maximum number of matching words that get scored
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_SCORE_CAP,
        value_parser = positive_count
    )]
    cap: usize,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line clue entry without TUI)
    Simple,

    /// Suggest words for a set of guesses, e.g. `suggest crane:GY--- slate:-Y-G-`
    Suggest {
        /// Guesses as WORD:FEEDBACK (G=correct, Y=present, -=absent), top row first
        guesses: Vec<String>,

        /// Extra letters greyed out on the keyboard
        #[arg(short, long, default_value = "")]
        absent: String,

        /// Show the derived constraints
        #[arg(short = 'c', long)]
        constraints: bool,
    },
}

/// Parse a count that must be at least one
fn positive_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Load the word source selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => {
            let words = words_from_slice(WORDS);
            info!("Using {} embedded words", words.len());
            Ok(words)
        }
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it runs without a log subscriber
    if !matches!(command, Commands::Play) {
        logging::init(cli.verbosity);
    }

    let words = load_words(&cli.wordlist)?;
    let config = SolverConfig {
        score_cap: cli.cap,
    };

    match command {
        Commands::Play => run_play_command(&words, config),
        Commands::Simple => run_simple(&words, config, cli.top).map_err(|e| anyhow::anyhow!(e)),
        Commands::Suggest {
            guesses,
            absent,
            constraints,
        } => {
            let suggest_config = SuggestConfig {
                guesses,
                absent,
                top: cli.top,
                solver: config,
            };
            run_suggest_command(suggest_config, constraints, &words)
        }
    }
}

fn run_suggest_command(
    config: SuggestConfig,
    show_constraints: bool,
    words: &[String],
) -> Result<()> {
    let result = suggest(config, words).map_err(|e| anyhow::anyhow!(e))?;
    print_suggest_result(&result, show_constraints);
    Ok(())
}

fn run_play_command(words: &[String], config: SolverConfig) -> Result<()> {
    use wordle_clues::interactive::{App, run_tui};

    let app = App::new(words, config);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_default_when_omitted() {
        let cli = Cli::try_parse_from(["wordle_clues", "simple"]).unwrap();
        assert_eq!(cli.top, DEFAULT_TOP);
        assert_eq!(cli.cap, DEFAULT_SCORE_CAP);
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert!(Cli::try_parse_from(["wordle_clues", "--cap", "0", "simple"]).is_err());
        assert!(Cli::try_parse_from(["wordle_clues", "simple", "--top", "0"]).is_err());
        assert!(Cli::try_parse_from(["wordle_clues", "--top", "x", "simple"]).is_err());

        let cli = Cli::try_parse_from(["wordle_clues", "--cap", "1", "--top", "3"]).unwrap();
        assert_eq!((cli.cap, cli.top), (1, 3));
    }
}
