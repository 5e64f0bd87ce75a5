//! Scenario tests for the match session controller, driven through a
//! renderer that records every outward call.

use noughts::{Cell, Marker, MatchSession, Player, Renderer, RoundPhase, Seat};

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RenderEvent {
    Board,
    EndMessage(String),
    ResetDisplay,
    ScoreFor(String, u32),
    ScoreReset,
}

/// Render sink that keeps the call sequence for assertions.
#[derive(Debug, Default)]
struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl Renderer for RecordingRenderer {
    fn render_board(&mut self, _cells: &[Cell; 9]) {
        self.events.push(RenderEvent::Board);
    }

    fn display_end_message(&mut self, message: &str) {
        self.events.push(RenderEvent::EndMessage(message.to_string()));
    }

    fn reset_display(&mut self, _cells: &[Cell; 9]) {
        self.events.push(RenderEvent::ResetDisplay);
    }

    fn update_score(&mut self, winner: Option<&Player>) {
        match winner {
            Some(player) => self
                .events
                .push(RenderEvent::ScoreFor(player.name().to_string(), player.score())),
            None => self.events.push(RenderEvent::ScoreReset),
        }
    }
}

fn session(target: Option<u32>) -> MatchSession<RecordingRenderer> {
    MatchSession::new("Player 1", "Player 2", target, RecordingRenderer::default())
}

/// Plays a top-row win for player one: X takes 0, 1, 2 while O answers
/// at 3 and 4.
fn play_top_row_win(session: &mut MatchSession<RecordingRenderer>) {
    for index in [0, 3, 1, 4, 2] {
        session.play_round(index);
    }
}

/// Fills the board with no three-in-a-row: X ends up on 0, 1, 5, 6, 8
/// and O on 2, 3, 4, 7.
fn play_tie(session: &mut MatchSession<RecordingRenderer>) {
    for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        session.play_round(index);
    }
}

#[test]
fn test_player_one_moves_first_with_x() {
    let s = session(None);
    assert_eq!(s.current_player().name(), "Player 1");
    assert_eq!(s.current_player().marker(), Marker::X);
    assert_eq!(s.player(Seat::Two).marker(), Marker::O);

    let [one, two] = s.players();
    assert_eq!(one.name(), "Player 1");
    assert_eq!(two.name(), "Player 2");
}

#[test]
fn test_turn_alternates_after_each_accepted_move() {
    let mut s = session(None);
    s.play_round(0);
    assert_eq!(s.current_player().name(), "Player 2");
    s.play_round(4);
    assert_eq!(s.current_player().name(), "Player 1");
}

#[test]
fn test_rejected_move_keeps_the_turn_and_emits_nothing() {
    let mut s = session(None);
    s.play_round(0);
    let events_before = s.renderer().events.len();

    s.play_round(0); // occupied
    assert_eq!(s.current_player().name(), "Player 2");
    assert_eq!(s.renderer().events.len(), events_before);
    assert_eq!(s.board().get(0), Some(Cell::Marked(Marker::X)));
}

#[test]
fn test_out_of_range_index_is_ignored() {
    let mut s = session(None);
    s.play_round(9);
    assert_eq!(s.current_player().name(), "Player 1");
    assert!(s.renderer().events.is_empty());
    assert_eq!(s.games_played(), 0);
}

#[test]
fn test_top_row_win_scores_player_one() {
    let mut s = session(None);
    play_top_row_win(&mut s);

    assert_eq!(s.phase(), RoundPhase::RoundOver);
    assert_eq!(s.player(Seat::One).score(), 1);
    assert_eq!(s.player(Seat::Two).score(), 0);
    assert_eq!(s.games_played(), 1);
    assert!(s
        .renderer()
        .events
        .contains(&RenderEvent::EndMessage("Player 1 wins!".to_string())));
}

#[test]
fn test_win_emits_board_then_score_then_message() {
    let mut s = session(None);
    play_top_row_win(&mut s);

    let events = &s.renderer().events;
    let tail = &events[events.len() - 3..];
    assert_eq!(tail[0], RenderEvent::Board);
    assert_eq!(tail[1], RenderEvent::ScoreFor("Player 1".to_string(), 1));
    assert_eq!(tail[2], RenderEvent::EndMessage("Player 1 wins!".to_string()));
}

#[test]
fn test_no_moves_accepted_after_the_round_is_decided() {
    let mut s = session(None);
    play_top_row_win(&mut s);

    let board_before = s.board().snapshot();
    let events_before = s.renderer().events.len();

    s.play_round(5); // an empty cell, but the round is over
    assert_eq!(s.board().snapshot(), board_before);
    assert_eq!(s.renderer().events.len(), events_before);
    assert_eq!(s.current_player().name(), "Player 1"); // frozen on the winner
}

#[test]
fn test_full_board_without_a_win_is_a_tie() {
    let mut s = session(None);
    play_tie(&mut s);

    assert_eq!(s.phase(), RoundPhase::RoundOver);
    assert_eq!(s.player(Seat::One).score(), 0);
    assert_eq!(s.player(Seat::Two).score(), 0);
    assert_eq!(s.games_played(), 1);

    let events = &s.renderer().events;
    assert!(events.contains(&RenderEvent::EndMessage("It's a tie!".to_string())));
    assert!(!events
        .iter()
        .any(|event| matches!(event, RenderEvent::ScoreFor(_, _))));
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut s = session(Some(5));
    play_top_row_win(&mut s);
    s.reset_game();

    // Player two takes the left column in the second round.
    for index in [4, 0, 5, 3, 7, 6] {
        s.play_round(index);
    }

    assert_eq!(s.player(Seat::One).score(), 1);
    assert_eq!(s.player(Seat::Two).score(), 1);
    assert_eq!(s.games_played(), 2);
    assert!(s
        .renderer()
        .events
        .contains(&RenderEvent::EndMessage("Player 2 wins!".to_string())));
}

#[test]
fn test_reset_game_starts_a_fresh_round_and_keeps_scores() {
    let mut s = session(None);
    play_top_row_win(&mut s);

    s.reset_game();
    assert_eq!(s.phase(), RoundPhase::AwaitingMove);
    assert_eq!(s.current_player().name(), "Player 1");
    assert!(s.board().cells().iter().all(|cell| *cell == Cell::Empty));
    assert_eq!(s.renderer().events.last(), Some(&RenderEvent::ResetDisplay));
    // Scores only reset at a match rollover, not between rounds.
    assert_eq!(s.player(Seat::One).score(), 1);
}

#[test]
fn test_reaching_the_target_declares_the_overall_winner_and_resets() {
    let mut s = session(Some(1));
    play_top_row_win(&mut s);

    let events = &s.renderer().events;
    let round_message = events
        .iter()
        .position(|e| *e == RenderEvent::EndMessage("Player 1 wins!".to_string()));
    let overall_message = events
        .iter()
        .position(|e| *e == RenderEvent::EndMessage("Player 1 is the overall winner!".to_string()));
    let score_reset = events.iter().position(|e| *e == RenderEvent::ScoreReset);

    // Round outcome first, then the match announcement, then the reset.
    assert!(round_message.unwrap() < overall_message.unwrap());
    assert!(overall_message.unwrap() < score_reset.unwrap());

    assert_eq!(s.games_played(), 0);
    assert_eq!(s.player(Seat::One).score(), 0);
    assert_eq!(s.player(Seat::Two).score(), 0);
}

#[test]
fn test_tie_on_the_final_game_names_player_two_overall() {
    let mut s = session(Some(1));
    play_tie(&mut s);

    // Scores are equal; the strict greater-than comparison names player two.
    assert!(s.renderer().events.contains(&RenderEvent::EndMessage(
        "Player 2 is the overall winner!".to_string()
    )));
    assert_eq!(s.games_played(), 0);
}

#[test]
fn test_absent_target_never_declares_an_overall_winner() {
    let mut s = session(None);
    for _ in 0..3 {
        play_top_row_win(&mut s);
        s.reset_game();
    }

    assert_eq!(s.games_played(), 3);
    assert_eq!(s.player(Seat::One).score(), 3);
    assert!(!s
        .renderer()
        .events
        .iter()
        .any(|event| matches!(event, RenderEvent::EndMessage(m) if m.contains("overall"))));
}

#[test]
fn test_target_is_read_when_the_check_runs() {
    let mut s = session(Some(10));
    play_top_row_win(&mut s);
    assert_eq!(s.games_played(), 1);

    s.reset_game();
    s.set_target_games(Some(2)); // lowered between rounds
    play_top_row_win(&mut s);

    assert!(s.renderer().events.contains(&RenderEvent::EndMessage(
        "Player 1 is the overall winner!".to_string()
    )));
    assert_eq!(s.games_played(), 0);
    assert_eq!(s.player(Seat::One).score(), 0);
}

#[test]
fn test_zero_target_fires_after_every_round() {
    let mut s = session(Some(0));
    play_top_row_win(&mut s);

    assert!(s.renderer().events.contains(&RenderEvent::EndMessage(
        "Player 1 is the overall winner!".to_string()
    )));
    assert_eq!(s.games_played(), 0);
    assert_eq!(s.player(Seat::One).score(), 0);
}
