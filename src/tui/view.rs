//! The render sink backing the TUI.

use crate::game::{Cell, Marker, Player};
use crate::render::Renderer;

/// Display state the session pushes render instructions into.
///
/// The draw loop reads this every frame; only [`Renderer`] calls change
/// it. Score labels therefore update exactly when the session says so,
/// not whenever the underlying tally happens to change.
#[derive(Debug)]
pub struct StatusView {
    cells: [Cell; 9],
    message: String,
    names: [String; 2],
    scores: [u32; 2],
}

impl StatusView {
    /// Creates an empty view labelled with the two player names.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            cells: [Cell::Empty; 9],
            message: String::new(),
            names: [player_one.into(), player_two.into()],
            scores: [0, 0],
        }
    }

    /// The most recently rendered board.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The current status message; empty while a round is in play.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Score labels, player one first.
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Score counters, player one first.
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }
}

impl Renderer for StatusView {
    fn render_board(&mut self, cells: &[Cell; 9]) {
        self.cells = *cells;
    }

    fn display_end_message(&mut self, message: &str) {
        self.message.clear();
        self.message.push_str(message);
    }

    fn reset_display(&mut self, cells: &[Cell; 9]) {
        self.cells = *cells;
        self.message.clear();
    }

    fn update_score(&mut self, winner: Option<&Player>) {
        match winner {
            Some(player) => {
                let slot = match player.marker() {
                    Marker::X => 0,
                    Marker::O => 1,
                };
                self.scores[slot] = player.score();
            }
            None => self.scores = [0, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MatchSession;

    #[test]
    fn test_reset_display_clears_message_and_board() {
        let mut view = StatusView::new("A", "B");
        view.render_board(&[Cell::Marked(Marker::X); 9]);
        view.display_end_message("A wins!");
        view.reset_display(&[Cell::Empty; 9]);
        assert_eq!(view.message(), "");
        assert!(view.cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_round_win_updates_the_winner_slot() {
        let view = StatusView::new("A", "B");
        let mut session = MatchSession::new("A", "B", None, view);
        // X takes the top row while O answers in the middle row
        for index in [0, 3, 1, 4, 2] {
            session.play_round(index);
        }
        assert_eq!(session.renderer().scores(), [1, 0]);
        assert_eq!(session.renderer().message(), "A wins!");
    }

    #[test]
    fn test_match_rollover_zeroes_both_slots() {
        let view = StatusView::new("A", "B");
        let mut session = MatchSession::new("A", "B", Some(1), view);
        for index in [0, 3, 1, 4, 2] {
            session.play_round(index);
        }
        assert_eq!(session.renderer().scores(), [0, 0]);
        assert_eq!(session.renderer().message(), "A is the overall winner!");
    }
}
