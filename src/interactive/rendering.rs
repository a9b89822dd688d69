//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, message log and status bar.

use super::app::{App, MessageStyle};
use crate::core::{MAX_ATTEMPTS, Verdict, WORD_LENGTH};
use crate::game::GameStatus;
use crate::output::KEYBOARD_ROWS;
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
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
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

/// Tile colours for a verdict
fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        Verdict::Empty => Style::default().fg(Color::White),
    }
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let board = session.board();
    let cursor = session.cursor();
    let editing = session.status() == GameStatus::Playing && session.target().is_some();

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2 + 2);
    lines.push(Line::from(""));

    for row in 0..MAX_ATTEMPTS {
        let feedback = session.row_feedback(row);
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        for (col, &verdict) in feedback.verdicts().iter().enumerate() {
            let letter = board.cell(row, col);
            let mut style = verdict_style(verdict);
            if verdict == Verdict::Empty {
                if editing && row == cursor.row && col == cursor.col {
                    style = style.add_modifier(Modifier::REVERSED);
                } else if letter.is_some() {
                    style = style.add_modifier(Modifier::BOLD);
                } else {
                    style = style.fg(Color::DarkGray);
                }
            }

            let text = letter.map_or_else(|| " · ".to_string(), |c| format!(" {c} "));
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    match session.status() {
        GameStatus::Won => lines.push(Line::styled(
            "🎉 You won!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        GameStatus::Lost => {
            let target = session.target().map(ToString::to_string).unwrap_or_default();
            lines.push(Line::styled(
                format!("😔 Game over. The word was {target}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        GameStatus::Playing => {}
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Keyboard
            Constraint::Min(5),     // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.session.keyboard();

    let mut lines = vec![Line::from("")];
    for keys in KEYBOARD_ROWS {
        let spans: Vec<Span> = keys
            .chars()
            .flat_map(|key| {
                [
                    Span::styled(format!(" {key} "), verdict_style(states.get(key))),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(
        "Enter: submit   Backspace: delete",
        Style::default().fg(Color::DarkGray),
    ));

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    if let Some(ref error) = app.source_error {
        items.push(
            ListItem::new(format!("⚠ {error}")).style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    items.extend(app.messages.iter().rev().map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    }));

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_style = if app.session.is_busy() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let mode = Paragraph::new(format!("Mode: {}", app.mode_label()))
        .style(mode_style)
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.status().is_terminal() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Ctrl-N: New Game"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
