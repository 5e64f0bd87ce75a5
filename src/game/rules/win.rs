//! Win detection over the eight fixed board lines.

use tracing::instrument;

use super::super::{Board, Cell, Marker};

/// The eight winning triples: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line fully occupied by `marker`, if any.
///
/// A round is won exactly when this returns `Some`. The scan is a plain
/// sweep of all eight triples; on a 3x3 board nothing cleverer pays off.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, marker: Marker) -> Option<[usize; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Marked(marker))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in xs {
            board.place(i, Marker::X);
        }
        for &i in os {
            board.place(i, Marker::O);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winning_line() {
        assert_eq!(winning_line(&Board::new(), Marker::X), None);
        assert_eq!(winning_line(&Board::new(), Marker::O), None);
    }

    #[test]
    fn test_each_of_the_eight_lines_wins() {
        for line in LINES {
            let mut board = Board::new();
            for &i in &line {
                board.place(i, Marker::O);
            }
            assert_eq!(winning_line(&board, Marker::O), Some(line));
            assert_eq!(winning_line(&board, Marker::X), None);
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_with(&[0, 1], &[4]);
        assert_eq!(winning_line(&board, Marker::X), None);
    }

    #[test]
    fn test_blocked_line_is_not_a_win() {
        let board = board_with(&[0, 2], &[1]);
        assert_eq!(winning_line(&board, Marker::X), None);
    }

    #[test]
    fn test_full_board_without_three_in_a_row() {
        let board = board_with(&[0, 1, 5, 6, 8], &[2, 3, 4, 7]);
        assert_eq!(winning_line(&board, Marker::X), None);
        assert_eq!(winning_line(&board, Marker::O), None);
    }
}
