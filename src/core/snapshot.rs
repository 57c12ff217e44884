//! Saved-game format.
//!
//! A `Snapshot` is the JSON record written by "save" and read by "load". Its
//! field names and symbols match games saved by earlier releases, which did
//! not always write the per-color phases or the move history; both default on
//! load. Loading validates the record before producing a `GameState`, so a
//! bad file never replaces a game already in memory.

use std::path::Path;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::MoveRecord;
use super::board::{Board, Cell, POINTS};
use super::player::{Color, ColorMap};
use super::state::{GameState, Phase, PIECES_PER_SIDE};

/// Why a saved game could not be loaded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not access saved game: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed saved game: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board must have {POINTS} points, found {found}")]
    BoardLength { found: usize },

    #[error("{color} is recorded with {recorded} pieces on board but the board shows {counted}")]
    CountMismatch { color: Color, recorded: u8, counted: usize },

    #[error("{color} has {total} pieces in hand and on board, more than {PIECES_PER_SIDE}")]
    TooManyPieces { color: Color, total: u8 },

    #[error("global phase cannot be {0}")]
    InvalidPhase(Phase),

    #[error("recorded phase {recorded} does not match the pieces in hand ({derived})")]
    PhaseMismatch { recorded: Phase, derived: Phase },

    #[error("{color} is recorded as owing a capture, but {reason}")]
    UnsatisfiableRemoval { color: Color, reason: &'static str },
}

fn default_mobility() -> Phase {
    Phase::Moving
}

/// External representation of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Vec<Cell>,
    pub current_player: Color,
    pub phase: Phase,
    #[serde(default = "default_mobility")]
    pub white_phase: Phase,
    #[serde(default = "default_mobility")]
    pub black_phase: Phase,
    pub white_pieces_in_hand: u8,
    pub black_pieces_in_hand: u8,
    pub white_pieces_on_board: u8,
    pub black_pieces_on_board: u8,
    pub winner: Option<Color>,
    #[serde(default)]
    pub move_history: Vec<MoveRecord>,
    #[serde(default)]
    pub pending_removal: bool,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board.cells().to_vec(),
            current_player: state.current_player,
            phase: state.phase(),
            white_phase: state.mobility_phase(Color::White),
            black_phase: state.mobility_phase(Color::Black),
            white_pieces_in_hand: state.in_hand[Color::White],
            black_pieces_in_hand: state.in_hand[Color::Black],
            white_pieces_on_board: state.on_board[Color::White],
            black_pieces_on_board: state.on_board[Color::Black],
            winner: state.winner,
            move_history: state.history.iter().copied().collect(),
            pending_removal: state.pending_removal,
        }
    }
}

impl TryFrom<Snapshot> for GameState {
    type Error = SnapshotError;

    /// Validate a snapshot and rebuild the state.
    ///
    /// Per-color phases are not trusted: they are derived from the counters.
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let board = Board::from_cells(&snapshot.board).ok_or(SnapshotError::BoardLength {
            found: snapshot.board.len(),
        })?;

        let in_hand = ColorMap::new(|c| match c {
            Color::White => snapshot.white_pieces_in_hand,
            Color::Black => snapshot.black_pieces_in_hand,
        });
        let on_board = ColorMap::new(|c| match c {
            Color::White => snapshot.white_pieces_on_board,
            Color::Black => snapshot.black_pieces_on_board,
        });

        for color in Color::ALL {
            let counted = board.count(color);
            if counted != usize::from(on_board[color]) {
                return Err(SnapshotError::CountMismatch {
                    color,
                    recorded: on_board[color],
                    counted,
                });
            }
            let total = in_hand[color].saturating_add(on_board[color]);
            if total > PIECES_PER_SIDE {
                return Err(SnapshotError::TooManyPieces { color, total });
            }
        }

        let state = GameState {
            board,
            in_hand,
            on_board,
            current_player: snapshot.current_player,
            winner: snapshot.winner,
            pending_removal: snapshot.pending_removal,
            history: snapshot.move_history.into_iter().collect::<Vector<_>>(),
            recording: true,
        };

        if snapshot.phase == Phase::Flying {
            return Err(SnapshotError::InvalidPhase(snapshot.phase));
        }
        if snapshot.phase != state.phase() {
            return Err(SnapshotError::PhaseMismatch {
                recorded: snapshot.phase,
                derived: state.phase(),
            });
        }

        if state.pending_removal {
            let color = state.current_player;
            let reason = if state.winner.is_some() {
                Some("the game is already decided")
            } else if state.board.complete_mills(color) == 0 {
                Some("it holds no complete mill")
            } else if state.on_board[color.opponent()] == 0 {
                Some("the opponent has no piece to capture")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(SnapshotError::UnsatisfiableRemoval { color, reason });
            }
        }

        Ok(state)
    }
}

impl GameState {
    /// Capture this state in the saved-game format.
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Rebuild a state from a saved-game record.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        Self::try_from(snapshot)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    /// Parse and validate a JSON saved game.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::try_from(snapshot)
    }

    /// Write this state to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a state from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_json() -> String {
        // Shape written before per-color phases and history were saved.
        let mut board = vec!["\" \""; POINTS];
        board[0] = "\"W\"";
        board[1] = "\"B\"";
        format!(
            r#"{{
                "board": [{}],
                "current_player": "W",
                "phase": 1,
                "white_pieces_in_hand": 8,
                "black_pieces_in_hand": 8,
                "white_pieces_on_board": 1,
                "black_pieces_on_board": 1,
                "winner": null
            }}"#,
            board.join(",")
        )
    }

    #[test]
    fn test_new_state_round_trip() {
        let state = GameState::new();
        let loaded = GameState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(state, loaded);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = legacy_json();
        let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.white_phase, Phase::Moving);
        assert_eq!(snapshot.black_phase, Phase::Moving);
        assert!(snapshot.move_history.is_empty());
        assert!(!snapshot.pending_removal);

        let state = GameState::from_json(&json).unwrap();
        assert_eq!(state.cell(0), Some(Cell::White));
        assert_eq!(state.cell(1), Some(Cell::Black));
        // Derived, not copied from the defaulted fields.
        assert_eq!(state.mobility_phase(Color::White), Phase::Placing);
    }

    #[test]
    fn test_snapshot_records_derived_phases() {
        let snapshot = GameState::new().to_snapshot();
        assert_eq!(snapshot.phase, Phase::Placing);
        assert_eq!(snapshot.white_phase, Phase::Placing);
        assert_eq!(snapshot.board.len(), POINTS);
    }

    #[test]
    fn test_rejects_short_board() {
        let mut snapshot = GameState::new().to_snapshot();
        snapshot.board.pop();
        assert!(matches!(
            GameState::from_snapshot(snapshot),
            Err(SnapshotError::BoardLength { found: 23 })
        ));
    }

    #[test]
    fn test_rejects_count_mismatch() {
        let mut snapshot = GameState::new().to_snapshot();
        snapshot.board[5] = Cell::Black;
        assert!(matches!(
            GameState::from_snapshot(snapshot),
            Err(SnapshotError::CountMismatch { color: Color::Black, recorded: 0, counted: 1 })
        ));
    }

    #[test]
    fn test_rejects_too_many_pieces() {
        let mut snapshot = GameState::new().to_snapshot();
        snapshot.board[5] = Cell::White;
        snapshot.white_pieces_on_board = 1;
        assert!(matches!(
            GameState::from_snapshot(snapshot),
            Err(SnapshotError::TooManyPieces { color: Color::White, total: 10 })
        ));
    }

    #[test]
    fn test_rejects_inconsistent_phase() {
        let mut snapshot = GameState::new().to_snapshot();
        snapshot.phase = Phase::Moving;
        assert!(matches!(
            GameState::from_snapshot(snapshot.clone()),
            Err(SnapshotError::PhaseMismatch { .. })
        ));

        snapshot.phase = Phase::Flying;
        assert!(matches!(
            GameState::from_snapshot(snapshot),
            Err(SnapshotError::InvalidPhase(Phase::Flying))
        ));
    }

    #[test]
    fn test_rejects_unknown_symbol() {
        let json = legacy_json().replacen("\"B\"", "\"X\"", 1);
        assert!(matches!(GameState::from_json(&json), Err(SnapshotError::Json(_))));
    }

    /// White on 0-1-2 with a capture owed, Black on 10 and 13.
    fn pending_snapshot() -> Snapshot {
        let mut snapshot = GameState::new().to_snapshot();
        for p in [0, 1, 2] {
            snapshot.board[p] = Cell::White;
        }
        for p in [10, 13] {
            snapshot.board[p] = Cell::Black;
        }
        snapshot.white_pieces_in_hand = 6;
        snapshot.white_pieces_on_board = 3;
        snapshot.black_pieces_in_hand = 7;
        snapshot.black_pieces_on_board = 2;
        snapshot.pending_removal = true;
        snapshot
    }

    #[test]
    fn test_accepts_satisfiable_removal() {
        let state = GameState::from_snapshot(pending_snapshot()).unwrap();
        assert!(state.pending_removal());
        assert_eq!(state.current_player(), Color::White);
    }

    #[test]
    fn test_rejects_removal_after_game_over() {
        let mut snapshot = pending_snapshot();
        snapshot.winner = Some(Color::White);
        assert!(matches!(
            GameState::from_snapshot(snapshot),
            Err(SnapshotError::UnsatisfiableRemoval { color: Color::White, .. })
        ));
    }

    #[test]
    fn test_rejects_removal_without_mill() {
        let mut snapshot = pending_snapshot();
        snapshot.board[2] = Cell::Empty;
        snapshot.board[5] = Cell::White;
        assert!(matches!(
            GameState::from_snapshot(snapshot),
            Err(SnapshotError::UnsatisfiableRemoval { color: Color::White, .. })
        ));
    }

    #[test]
    fn test_rejects_removal_with_nothing_to_capture() {
        let mut snapshot = pending_snapshot();
        snapshot.board[10] = Cell::Empty;
        snapshot.board[13] = Cell::Empty;
        snapshot.black_pieces_on_board = 0;
        snapshot.black_pieces_in_hand = 9;
        let err = GameState::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, SnapshotError::UnsatisfiableRemoval { color: Color::White, .. }));
        assert!(err.to_string().contains("no piece to capture"));
    }
}
