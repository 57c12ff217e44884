//! Result of a successful action.

use crate::core::Color;

/// Text that marks a completed mill at the presentation boundary.
pub const MILL_FORMED: &str = "Mill formed";

/// What happened after an accepted place, move or remove.
///
/// Callers switch on the variant. The `Display` text is only for people.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Piece placed; turn passed.
    Placed,
    /// Piece moved; turn passed.
    Moved,
    /// Opponent piece captured; turn passed.
    Removed,
    /// A mill was completed: the same side must now remove a piece.
    MillPendingRemoval,
    /// The action ended the game.
    GameOver { winner: Color },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Placed => write!(f, "Piece placed."),
            Outcome::Moved => write!(f, "Piece moved."),
            Outcome::Removed => write!(f, "Piece removed."),
            Outcome::MillPendingRemoval => write!(f, "{MILL_FORMED}. Remove an opponent's piece."),
            Outcome::GameOver { .. } => write!(f, "Game over."),
        }
    }
}
