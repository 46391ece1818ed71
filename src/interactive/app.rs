//! TUI application state and logic

use crate::core::{GridState, KeyStates, Letter};
use crate::solver::{SolveError, Solver, SolverConfig, Suggestion};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Number of suggestions shown in the side panel
pub const SUGGESTIONS_SHOWN: usize = 10;

pub const WELCOME_MESSAGE: &str = "Enter your Wordle clues";
pub const NO_CLUES_MESSAGE: &str = "Please enter some Wordle clues first!";
pub const NO_MATCHES_MESSAGE: &str = "No matching words found. Try adjusting your clues.";

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a, String>,
    pub grid: GridState,
    pub keys: KeyStates,
    pub suggestions: Vec<Suggestion>,
    pub total_matches: usize,
    pub message: Message,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [String], config: SolverConfig) -> Self {
        Self {
            solver: Solver::with_config(words, config),
            grid: GridState::new(),
            keys: KeyStates::new(),
            suggestions: Vec::new(),
            total_matches: 0,
            message: Message {
                text: WELCOME_MESSAGE.to_string(),
                style: MessageStyle::Info,
            },
            should_quit: false,
        }
    }

    pub fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Message {
            text: text.to_string(),
            style,
        };
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(letter) = Letter::from_char(c) {
            self.grid.type_letter(letter);
        }
    }

    /// Cycle the active cell's state and mirror the clue on the keyboard
    pub fn toggle_active(&mut self) {
        let (row, col) = self.grid.active_cell();
        if let Some((Some(letter), state)) = self.grid.toggle_state(row, col) {
            self.keys.record(letter, state);
        }
    }

    /// Clear grid, keyboard and suggestions
    pub fn reset(&mut self) {
        self.grid.reset();
        self.keys.reset();
        self.suggestions.clear();
        self.total_matches = 0;
        self.set_message(WELCOME_MESSAGE, MessageStyle::Info);
    }

    /// Run the solver on the current board
    pub fn solve(&mut self) {
        if !self.solver.is_ready() {
            self.set_message(&SolveError::WordSourceEmpty.to_string(), MessageStyle::Error);
            return;
        }

        if !self.grid.has_clues() && !self.keys.has_clues() {
            self.set_message(NO_CLUES_MESSAGE, MessageStyle::Error);
            return;
        }

        match self.solver.solve(&self.grid, &self.keys) {
            Ok(solution) => {
                self.suggestions = solution.suggestions;
                self.total_matches = solution.total_matches;
                if self.total_matches == 0 {
                    self.set_message(NO_MATCHES_MESSAGE, MessageStyle::Error);
                } else {
                    // Count the scored words; fall back to all matches if none were scored
                    let found = if self.suggestions.is_empty() {
                        self.total_matches
                    } else {
                        self.suggestions.len()
                    };
                    let found = format!("Found {found} possible words");
                    self.set_message(&found, MessageStyle::Success);
                }
            }
            Err(e) => self.set_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Suggestions for the side panel
    #[must_use]
    pub fn top_suggestions(&self) -> &[Suggestion] {
        &self.suggestions[..self.suggestions.len().min(SUGGESTIONS_SHOWN)]
    }

    /// Apply a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.solve(),
            KeyCode::Tab | KeyCode::Char(' ') => self.toggle_active(),
            KeyCode::Backspace => self.grid.backspace(),
            KeyCode::Left => self.grid.move_active(0, -1),
            KeyCode::Right => self.grid.move_active(0, 1),
            KeyCode::Up => self.grid.move_active(-1, 0),
            KeyCode::Down => self.grid.move_active(1, 0),
            KeyCode::Char(c) if !ctrl => self.type_char(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellState, KeyState};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn words() -> Vec<String> {
        ["crane", "slate", "stare", "crate"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn starts_with_welcome_message() {
        let words = words();
        let app = App::new(&words, SolverConfig::default());
        assert_eq!(app.message.text, WELCOME_MESSAGE);
        assert!(!app.should_quit);
    }

    #[test]
    fn typing_fills_row_and_stops_at_last_column() {
        let words = words();
        let mut app = App::new(&words, SolverConfig::default());
        type_word(&mut app, "cranes");

        assert_eq!(app.grid.active_cell(), (0, 4));
        let last = app.grid.cell(0, 4).unwrap();
        assert_eq!(last.letter, Letter::from_char('s'));
        assert_eq!(last.state, CellState::Filled);
    }

    #[test]
    fn enter_without_clues_prompts() {
        let words = words();
        let mut app = App::new(&words, SolverConfig::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.text, NO_CLUES_MESSAGE);
        assert!(app.suggestions.is_empty());
    }

    #[test]
    fn toggling_records_key_state() {
        let words = words();
        let mut app = App::new(&words, SolverConfig::default());
        type_word(&mut app, "c");
        press(&mut app, KeyCode::Left);

        // Filled -> Correct
        press(&mut app, KeyCode::Tab);
        let c = Letter::from_char('c').unwrap();
        assert_eq!(app.grid.cell(0, 0).unwrap().state, CellState::Correct);
        assert_eq!(app.keys.get(c), KeyState::Correct);

        // Correct -> Present keeps the stronger key evidence
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.keys.get(c), KeyState::Correct);
    }

    #[test]
    fn enter_solves_board() {
        let words = words();
        let mut app = App::new(&words, SolverConfig::default());
        type_word(&mut app, "s");
        press(&mut app, KeyCode::Left);
        // Filled -> Correct -> Present -> Absent
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Enter);

        let found: Vec<&str> = app.suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&"crane") && found.contains(&"crate"));
        assert_eq!(app.message.text, "Found 2 possible words");
    }

    #[test]
    fn no_matches_message() {
        let words = words();
        let mut app = App::new(&words, SolverConfig::default());
        type_word(&mut app, "z");
        press(&mut app, KeyCode::Left);
        // Filled -> Correct
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.text, NO_MATCHES_MESSAGE);
    }

    #[test]
    fn zero_score_cap_still_reports_matches() {
        let words = words();
        let mut app = App::new(&words, SolverConfig { score_cap: 0 });
        type_word(&mut app, "z");
        press(&mut app, KeyCode::Left);
        // Filled -> Correct -> Present -> Absent
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.total_matches, 4);
        assert!(app.suggestions.is_empty());
        assert_eq!(app.message.style, MessageStyle::Success);
        assert_eq!(app.message.text, "Found 4 possible words");
    }

    #[test]
    fn ctrl_r_resets_everything() {
        let words = words();
        let mut app = App::new(&words, SolverConfig::default());
        type_word(&mut app, "cr");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(!app.grid.has_clues());
        assert!(!app.keys.has_clues());
        assert!(app.suggestions.is_empty());
        assert_eq!(app.grid.active_cell(), (0, 0));
        assert_eq!(app.message.text, WELCOME_MESSAGE);
    }

    #[test]
    fn quit_keys() {
        let words = words();
        let mut app = App::new(&words, SolverConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&words, SolverConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn empty_word_list_reports_error() {
        let words: Vec<String> = Vec::new();
        let mut app = App::new(&words, SolverConfig::default());
        type_word(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.style, MessageStyle::Error);
        assert!(app.message.text.contains("Word list"));
    }
}
