//! TUI rendering with ratatui
//!
//! Guess grid, letter board, message log and statistics.

use super::app::{App, MessageStyle};
use crate::core::{LetterState, WORD_LEN};
use crate::game::{GameStatus, LetterBoard, LetterHint, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Board and side panel
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];

    for row in 0..MAX_ATTEMPTS {
        lines.push(grid_row(app, row));
        lines.push(Line::from(""));
    }

    lines.extend(keyboard_lines(app.game.letters()));

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn grid_row<'a>(app: &App, row: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(WORD_LEN * 2);

    if let Some(turn) = app.game.turns().get(row) {
        for (letter, state) in turn.guess().text().chars().zip(turn.feedback().iter()) {
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                tile_style(state),
            ));
            spans.push(Span::raw(" "));
        }
    } else if row == app.game.attempts_used() && !app.game.is_over() {
        // Row being typed
        let typed: Vec<char> = app.input_buffer.chars().collect();
        for i in 0..WORD_LEN {
            let text = typed
                .get(i)
                .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
    } else {
        for _ in 0..WORD_LEN {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
    }

    spans.pop();
    Line::from(spans)
}

fn tile_style(state: LetterState) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        LetterState::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterState::Misplaced => base.fg(Color::Black).bg(Color::Yellow),
        LetterState::Incorrect => base.fg(Color::White).bg(Color::DarkGray),
    }
}

fn keyboard_lines<'a>(board: &LetterBoard) -> Vec<Line<'a>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let label = format!(" {} ", char::from(letter.to_ascii_uppercase()));
                    match board.hint(letter) {
                        LetterHint::Placed => Span::styled(
                            label,
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        ),
                        LetterHint::Present => Span::styled(
                            label,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        // Known-absent letters drop out of the board
                        LetterHint::Absent => {
                            Span::styled("   ", Style::default().fg(Color::DarkGray))
                        }
                        LetterHint::Unknown => Span::raw(label),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Won: {}   Win rate: {:.0}%",
            stats.games_played,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(""),
    ];

    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = count * 20 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.game.status() {
        GameStatus::Won => (" 🎉 Solved! | 'n' new game, 'q' quit ", Color::Green),
        GameStatus::Lost => (" Out of guesses | 'n' new game, 'q' quit ", Color::Red),
        GameStatus::AwaitingGuess => (" Type your guess and press Enter ", Color::Yellow),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Guess {}/{MAX_ATTEMPTS} | Enter: Submit | Esc: Clear | Ctrl-N: New Game | Ctrl-C: Quit",
        (app.game.attempts_used() + 1).min(MAX_ATTEMPTS)
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
