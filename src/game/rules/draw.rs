//! Draw detection: a full board with no winner is a tie.

use tracing::instrument;

use super::super::{Board, Cell};

/// Checks whether every cell on the board is occupied.
///
/// The session treats a full board as a tie only after win detection has
/// come up empty, so this function does not look at markers at all.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}
