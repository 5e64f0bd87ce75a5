//! Player records: fixed identity, session-managed score.

use super::types::Marker;

/// A player in the match.
///
/// Exactly two exist for the lifetime of a session. Name and marker are
/// fixed at construction; the score only changes through the session
/// controller, which is why the mutators are module-private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    marker: Marker,
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            score: 0,
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Rounds won since the last match rollover.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Credits a round win.
    pub(super) fn record_win(&mut self) {
        self.score += 1;
    }

    /// Zeroes the score at a match rollover.
    pub(super) fn reset_score(&mut self) {
        self.score = 0;
    }
}
