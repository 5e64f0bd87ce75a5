//! Noughts - terminal noughts-and-crosses with match scoring.
//!
//! The engine is presentation-agnostic: a [`MatchSession`] owns the board,
//! the two players, and a [`Renderer`] it pushes every visible state
//! change through. The bundled [`tui`] runs the session in the terminal;
//! any other front end only has to implement the one trait.
//!
//! # Example
//!
//! ```
//! use noughts::{Cell, MatchSession, Player, Renderer, Seat};
//!
//! struct Headless;
//!
//! impl Renderer for Headless {
//!     fn render_board(&mut self, _cells: &[Cell; 9]) {}
//!     fn display_end_message(&mut self, _message: &str) {}
//!     fn reset_display(&mut self, _cells: &[Cell; 9]) {}
//!     fn update_score(&mut self, _winner: Option<&Player>) {}
//! }
//!
//! let mut session = MatchSession::new("Ann", "Ben", Some(3), Headless);
//! for index in [0, 3, 1, 4, 2] {
//!     session.play_round(index); // Ann takes the top row
//! }
//! assert_eq!(session.player(Seat::One).score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod game;
pub mod render;
pub mod tui;

pub use config::{ConfigError, MatchConfig};
pub use game::{Board, Cell, Marker, MatchSession, Player, RoundPhase, Seat};
pub use render::Renderer;
