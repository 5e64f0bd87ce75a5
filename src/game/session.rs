//! The session controller: turn order, round outcomes, and match scoring.

use tracing::{debug, info, instrument};

use crate::render::Renderer;

use super::board::Board;
use super::player::Player;
use super::rules;
use super::types::{Marker, Seat};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// The current player may place a marker.
    AwaitingMove,
    /// The round is decided; moves are ignored until [`MatchSession::reset_game`].
    RoundOver,
}

/// Orchestrates rounds of noughts-and-crosses between two fixed players.
///
/// The session owns the board, both player records, and the renderer it
/// drives. Every accepted move runs to completion synchronously: place,
/// evaluate win then draw, update scores, and emit render instructions as
/// side effects. A rejected move changes nothing and emits nothing.
#[derive(Debug)]
pub struct MatchSession<R> {
    board: Board,
    players: [Player; 2],
    current: Seat,
    phase: RoundPhase,
    games_played: u32,
    target_games: Option<u32>,
    renderer: R,
}

impl<R: Renderer> MatchSession<R> {
    /// Creates a session. Player one takes X and moves first; both scores
    /// and the games-played tally start at zero.
    #[instrument(skip_all)]
    pub fn new(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        target_games: Option<u32>,
        renderer: R,
    ) -> Self {
        let players = [
            Player::new(player_one, Marker::X),
            Player::new(player_two, Marker::O),
        ];
        info!(
            player_one = players[0].name(),
            player_two = players[1].name(),
            ?target_games,
            "creating match session"
        );
        Self {
            board: Board::new(),
            players,
            current: Seat::One,
            phase: RoundPhase::AwaitingMove,
            games_played: 0,
            target_games,
            renderer,
        }
    }

    /// Plays one move of the current round at `index`.
    ///
    /// A rejected move (round already over, occupied cell, or an index
    /// out of range) leaves every piece of state untouched. On success
    /// the board is rendered, then exactly one of three things happens:
    /// the current player wins the round, the full board ties it, or the
    /// turn passes to the other seat.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, index: usize) {
        if self.phase == RoundPhase::RoundOver {
            debug!(index, "round is over; move ignored");
            return;
        }

        let seat = self.current.index();
        let marker = self.players[seat].marker();
        if !self.board.place(index, marker) {
            return;
        }

        self.renderer.render_board(&self.board.snapshot());

        if rules::winning_line(&self.board, marker).is_some() {
            self.players[seat].record_win();
            self.games_played += 1;
            self.phase = RoundPhase::RoundOver;

            let winner = &self.players[seat];
            info!(winner = winner.name(), score = winner.score(), "round won");
            let message = format!("{} wins!", winner.name());
            self.renderer.update_score(Some(winner));
            self.renderer.display_end_message(&message);
            self.check_overall_winner();
        } else if rules::is_full(&self.board) {
            self.games_played += 1;
            self.phase = RoundPhase::RoundOver;

            info!(games_played = self.games_played, "round tied");
            self.renderer.display_end_message("It's a tie!");
            self.check_overall_winner();
        } else {
            self.current = self.current.other();
            debug!(next = self.players[self.current.index()].name(), "turn passed");
        }
    }

    /// Starts a fresh round: clears the board, hands the first move back
    /// to player one, and resets the display. Scores and the games-played
    /// tally carry over.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        debug!("resetting round");
        self.board.reset();
        self.current = Seat::One;
        self.phase = RoundPhase::AwaitingMove;
        self.renderer.reset_display(&self.board.snapshot());
    }

    /// Updates the target game count. `None` disables the overall-winner
    /// check entirely. The value is read when a round ends, never cached,
    /// so a change between rounds applies to the next check.
    #[instrument(skip(self))]
    pub fn set_target_games(&mut self, target: Option<u32>) {
        info!(?target, "target game count updated");
        self.target_games = target;
    }

    /// Declares the overall winner and resets the tally once the target
    /// game count has been reached.
    ///
    /// Runs after every decided round. The comparison is a strict
    /// greater-than on player one's score, so equal scores name player
    /// two. The announcement is emitted before the tally resets.
    fn check_overall_winner(&mut self) {
        let Some(target) = self.target_games else {
            return;
        };
        if self.games_played < target {
            return;
        }

        let overall = if self.players[0].score() > self.players[1].score() {
            &self.players[0]
        } else {
            &self.players[1]
        };
        info!(
            winner = overall.name(),
            score_one = self.players[0].score(),
            score_two = self.players[1].score(),
            "match decided"
        );
        let message = format!("{} is the overall winner!", overall.name());
        self.renderer.display_end_message(&message);

        self.games_played = 0;
        for player in &mut self.players {
            player.reset_score();
        }
        self.renderer.update_score(None);
    }

    /// The player whose turn it is. Once a round is decided this stays on
    /// the player who moved last.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    /// The player in the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Both players, seat one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Phase of the current round.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Rounds decided since the last match rollover.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// The target game count, if one is set.
    pub fn target_games(&self) -> Option<u32> {
        self.target_games
    }

    /// The render sink this session drives.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
