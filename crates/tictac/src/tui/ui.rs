//! Stateless UI rendering for the full-screen board.

use super::app::{App, Mode};
use super::setup::{FIELD_LABELS, SetupForm};
use crate::palette::Rgb;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strum::IntoEnumIterator;
use tictac_engine::{Coord, GameEngine, PlayerId};

const HELP: &str =
    "←↑↓→ move  Enter/Space place  1-9 place  n next round  r reset scores  p players  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], app.engine());
    draw_board(frame, chunks[2], app);

    let status_text = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    match app.mode() {
        Mode::Playing => {}
        Mode::ConfirmReset => draw_confirm(frame, area),
        Mode::Setup(form) => draw_setup(frame, area, form),
    }
}

fn player_color(engine: &GameEngine, seat: PlayerId) -> Color {
    Rgb::for_player(engine.player(seat).color(), seat).into()
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, engine: &GameEngine) {
    let separator = Span::styled("    |    ", Style::default().fg(Color::DarkGray));
    let mut spans = Vec::new();
    for seat in PlayerId::iter() {
        let player = engine.player(seat);
        let mut style = Style::default().fg(player_color(engine, seat));
        if seat == engine.current_seat() && !engine.status().is_terminal() {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(
            format!("{} [{}]: {}", player.name(), player.symbol(), player.score()),
            style,
        ));
        spans.push(separator.clone());
    }
    spans.push(Span::raw(format!("Draws: {}", engine.draws())));

    let scoreboard = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scoreboard"));
    frame.render_widget(scoreboard, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    // Center the board
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, Coord { row, col });
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, at: Coord) {
    let engine = app.engine();

    let (symbol, mut style) = match engine.board().get(at).occupant() {
        Some(seat) => (
            format!(" {} ", engine.player(seat).symbol()),
            Style::default()
                .fg(player_color(engine, seat))
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            format!(" {} ", at.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let on_winning_line = engine
        .winning_line()
        .is_some_and(|line| line.contains(&at));
    if on_winning_line {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if at == app.cursor() && matches!(app.mode(), Mode::Playing) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .style(style);

    frame.render_widget(paragraph, area);
}

fn draw_confirm(frame: &mut Frame, area: Rect) {
    let popup = center_rect(area, 36, 5);
    let text = Paragraph::new("Reset all scores?\n\n(y) yes   (n) no")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Confirm"));
    frame.render_widget(Clear, popup);
    frame.render_widget(text, popup);
}

fn draw_setup(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let popup = center_rect(area, 48, 10);

    let mut lines: Vec<Line> = FIELD_LABELS
        .iter()
        .zip(form.fields())
        .enumerate()
        .map(|(i, (label, value))| {
            let focused = i == form.focus();
            let value_style = if focused {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default()
            };
            let cursor = if focused { "_" } else { "" };
            Line::from(vec![
                Span::raw(format!("{label:>16}: ")),
                Span::styled(format!("{value}{cursor}"), value_style),
            ])
        })
        .collect();

    lines.push(Line::raw(""));
    match form.error() {
        Some(error) => lines.push(Line::styled(error, Style::default().fg(Color::Red))),
        None => lines.push(Line::styled(
            "Tab switch   Enter apply   Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
