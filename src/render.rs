//! The boundary between the game engine and its presentation layer.

use crate::game::{Cell, Player};

/// Presentation sink driven by the session controller.
///
/// The controller owns a `Renderer` and pushes every visible state change
/// through it; the presentation layer never reads engine state on its own
/// schedule. Board snapshots are passed as owned copies so a sink can keep
/// them without borrowing the engine.
pub trait Renderer {
    /// Redraws all nine cells from the given snapshot.
    fn render_board(&mut self, cells: &[Cell; 9]);

    /// Shows a status message at the end of a round or match.
    fn display_end_message(&mut self, message: &str);

    /// Redraws the board from the given snapshot and clears the status
    /// message. Called when a fresh round starts.
    fn reset_display(&mut self, cells: &[Cell; 9]);

    /// Updates the visible score counters.
    ///
    /// `Some(winner)` refreshes that player's counter from their current
    /// score; `None` zeroes both counters after a match rollover.
    fn update_score(&mut self, winner: Option<&Player>);
}
