//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and suggestion panel.

use super::app::{App, MessageStyle};
use crate::core::{CellState, KeyState, Letter, QWERTY_ROWS};
use crate::output::formatters::probability_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and suggestions
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Message line
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_suggestions(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_help(f, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🎯 WORDLE CLUE SOLVER | {} words", app.solver.word_count());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(state: CellState) -> Style {
    let base = Style::new().add_modifier(Modifier::BOLD);
    match state {
        CellState::Empty => base.fg(Color::DarkGray),
        CellState::Filled => base.fg(Color::White),
        CellState::Correct => base.fg(Color::Black).bg(Color::Green),
        CellState::Present => base.fg(Color::Black).bg(Color::Yellow),
        CellState::Absent => base.fg(Color::White).bg(Color::DarkGray),
    }
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Default => Style::new().fg(Color::White),
        KeyState::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        KeyState::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        KeyState::Absent => Style::new().fg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let active = app.grid.active_cell();

    let lines: Vec<Line> = app
        .grid
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let mut spans = Vec::with_capacity(cells.len() * 3);
            for (col, cell) in cells.iter().enumerate() {
                let glyph = cell
                    .letter
                    .map_or('·', |letter| letter.to_char().to_ascii_uppercase());
                let (open, close) = if (row, col) == active {
                    ('[', ']')
                } else {
                    (' ', ' ')
                };
                spans.push(Span::raw(open.to_string()));
                spans.push(Span::styled(format!(" {glyph} "), cell_style(cell.state)));
                spans.push(Span::raw(close.to_string()));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .top_suggestions()
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<6}", suggestion.word.to_uppercase()), style),
                Span::styled(
                    format!("{:>5.1}% ", suggestion.probability),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    probability_bar(suggestion.probability, 12),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let title = if app.total_matches > app.suggestions.len() {
        format!(
            " Suggestions ({} of {} scored) ",
            app.suggestions.len(),
            app.total_matches
        )
    } else {
        " Suggestions ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .filter_map(Letter::from_char)
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {} ", letter.to_char().to_ascii_uppercase()),
                            key_style(app.keys.get(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.message.style {
        MessageStyle::Info => Color::White,
        MessageStyle::Success => Color::Green,
        MessageStyle::Error => Color::Red,
    };

    let message = Paragraph::new(app.message.text.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(message, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "a-z: Type | ←↑↓→: Move | Tab/Space: Cycle clue | Enter: Solve | Ctrl-R: Reset | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
