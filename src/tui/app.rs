//! Application state: key events in, session calls out.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info, instrument};

use crate::config::MatchConfig;
use crate::game::{MatchSession, RoundPhase, rules};

use super::view::StatusView;

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTransition {
    /// Keep running.
    Stay,
    /// Exit the application.
    Quit,
}

/// TUI application state: a match session plus a board cursor.
pub struct App {
    session: MatchSession<StatusView>,
    cursor: usize,
}

impl App {
    /// Creates the app from a loaded configuration.
    pub fn new(config: &MatchConfig) -> Self {
        let view = StatusView::new(config.player_one().clone(), config.player_two().clone());
        let session = MatchSession::new(
            config.player_one().clone(),
            config.player_two().clone(),
            *config.target_games(),
            view,
        );
        Self {
            session,
            // Cell 4 is the center of the grid.
            cursor: 4,
        }
    }

    /// Handles one key event and reports whether the app should keep
    /// running. Unknown keys are ignored.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("quit requested");
                return AppTransition::Quit;
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.session.play_round(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits 1-9 map to cells 0-8 in reading order, matching
                // the hints shown on empty cells.
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                {
                    self.session.play_round(digit as usize - 1);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.reset_game(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_target(1),
            KeyCode::Char('-') | KeyCode::Char('_') => self.adjust_target(-1),
            _ => {}
        }
        AppTransition::Stay
    }

    /// Moves the cursor on the 3x3 grid, clamped at the edges.
    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let col = ((self.cursor % 3) as i32 + dx).clamp(0, 2);
        let row = ((self.cursor / 3) as i32 + dy).clamp(0, 2);
        self.cursor = (row * 3 + col) as usize;
        debug!(cursor = self.cursor, "cursor moved");
    }

    /// Steps the target game count up or down. Stepping below one clears
    /// the target, which disables the overall-winner check.
    fn adjust_target(&mut self, step: i32) {
        let next = match self.session.target_games() {
            None if step > 0 => Some(1),
            None => None,
            Some(target) if step > 0 => Some(target.saturating_add(1)),
            Some(target) => target.checked_sub(1).filter(|t| *t >= 1),
        };
        self.session.set_target_games(next);
    }

    /// The active match session.
    pub fn session(&self) -> &MatchSession<StatusView> {
        &self.session
    }

    /// The render sink the draw loop reads from.
    pub fn view(&self) -> &StatusView {
        self.session.renderer()
    }

    /// The board cursor, a cell index 0-8.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The winning triple of the decided round, if the round was won.
    /// Ties and rounds still in play return `None`.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        if self.session.phase() == RoundPhase::RoundOver {
            // The turn pointer freezes on whoever moved last, so on a won
            // round it names the winner.
            rules::winning_line(self.session.board(), self.session.current_player().marker())
        } else {
            None
        }
    }
}
