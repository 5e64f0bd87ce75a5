//! Rule evaluation for noughts-and-crosses.
//!
//! Pure functions over [`Board`](super::Board) state. Keeping them out of
//! the board type lets the session controller compose them explicitly:
//! win before draw, draw only on a full board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;
