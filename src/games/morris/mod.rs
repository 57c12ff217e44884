//! Nine Men's Morris.
//!
//! - Each side starts with nine pieces in hand and places them in turn
//! - Once both hands are empty, pieces slide to neighboring points
//! - A side down to three pieces may fly to any empty point
//! - Completing a mill captures one opponent piece
//! - A side loses when reduced to two pieces or left without a move

mod game;
mod session;

pub use game::Morris;
pub use session::{Report, Session};
