//! The game engine: board storage, rule evaluation, players, and the
//! session controller that ties them together.

mod board;
mod player;
pub mod rules;
mod session;
mod types;

pub use board::Board;
pub use player::Player;
pub use session::{MatchSession, RoundPhase};
pub use types::{Cell, Marker, Seat};
