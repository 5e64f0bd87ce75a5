//! Core domain types shared across the game engine.

use derive_more::Display;

/// Marker identifying which player occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Marker {
    /// The cross marker (player one, moves first).
    #[display("X")]
    X,
    /// The nought marker (player two).
    #[display("O")]
    O,
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No marker placed yet.
    Empty,
    /// Cell claimed by the player with the given marker.
    Marked(Marker),
}

/// One of the two fixed player slots in a match.
///
/// The session's current-turn pointer is a `Seat`; the two player records
/// themselves never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// First player (marker X, moves first each round).
    One,
    /// Second player (marker O).
    Two,
}

impl Seat {
    /// Returns the opposite seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Index of this seat in the session's player pair.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}
