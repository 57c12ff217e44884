//! Rejected actions.
//!
//! Every variant is a recoverable refusal: the state is left exactly as it
//! was. The messages are shown to players as-is.

use thiserror::Error;

use crate::core::{Color, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Position {position} is not on the board.")]
    OffBoard { position: usize },

    #[error("Position already occupied.")]
    InvalidCell { position: usize },

    #[error("No pieces left to place.")]
    NoPiecesInHand,

    #[error("Pieces cannot move while the game is in the {0} phase.")]
    WrongPhase(Phase),

    #[error("You can only move your own pieces.")]
    NotOwner { position: usize },

    #[error("Destination position is occupied.")]
    DestinationOccupied { position: usize },

    #[error("You can only move to adjacent positions.")]
    NotAdjacent { from: usize, to: usize },

    #[error("You can only remove an opponent's piece.")]
    NotOpponentPiece { position: usize },

    #[error("There is no mill to capture with.")]
    IllegalRemovalContext,

    #[error("A mill was formed: remove an opponent's piece first.")]
    RemovalPending,

    #[error("The game is over.")]
    GameOver,

    #[error("Recorded move belongs to {found}, but {expected} was to act.")]
    OutOfTurn { expected: Color, found: Color },
}
