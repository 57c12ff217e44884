//! Core types: colors, board geometry, actions, state, snapshots, RNG.
//!
//! Nothing here enforces rules. The rules engine in `games::morris` reads and
//! mutates these types; the search copies `GameState` freely.

pub mod action;
pub mod board;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::{Action, MoveRecord, ParseActionError, RecordShapeError};
pub use board::{is_adjacent, mills, mills_through, Board, Cell, Line, ADJACENCY, POINTS};
pub use player::{Color, ColorMap, ParseColorError};
pub use rng::GameRng;
pub use snapshot::{Snapshot, SnapshotError};
pub use state::{GameState, Phase, PhaseValueError, FLYING_PIECES, PIECES_PER_SIDE};
