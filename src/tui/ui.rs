//! Stateless rendering for the match screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::{Cell, Marker};

use super::app::App;

/// Draws the full match screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Scoreboard
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);
    draw_scoreboard(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
    draw_help(frame, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 41, 11);

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

    let win_line = app.winning_line();
    draw_row(frame, rows[0], app, 0, win_line);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, 3, win_line);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, 6, win_line);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, start: usize, win_line: Option<[usize; 3]>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, start, win_line);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, start + 1, win_line);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, start + 2, win_line);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize, win_line: Option<[usize; 3]>) {
    // Empty cells show their digit key as a placement hint.
    let (symbol, base_style) = match app.view().cells()[index] {
        Cell::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Marker::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Marker::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let in_win_line = win_line.is_some_and(|line| line.contains(&index));
    let style = if in_win_line {
        base_style.fg(Color::Green)
    } else if index == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let names = view.names();
    let scores = view.scores();
    let played = match app.session().target_games() {
        Some(target) => format!("played {}/{}", app.session().games_played(), target),
        None => format!("played {}", app.session().games_played()),
    };
    let line = format!(
        "{} (X) {}  :  {} {} (O)    {}",
        names[0], scores[0], scores[1], names[1], played
    );

    let scoreboard = Paragraph::new(line)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scoreboard, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    // An empty view message means the round is live; show whose turn it is.
    let text = if app.view().message().is_empty() {
        let player = app.session().current_player();
        format!("{} to move ({})", player.name(), player.marker())
    } else {
        app.view().message().to_string()
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "arrows/hjkl: move | enter/1-9: place | r: new round | +/-: games per match | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
