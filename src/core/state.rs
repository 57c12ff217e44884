//! Game state: board, counters, side to move, and history.
//!
//! `GameState` is a plain value. Rule enforcement lives in
//! [`crate::games::morris::Morris`]; this module only stores the data and
//! derives phases from it.
//!
//! ## Cloning
//!
//! The search copies the state once per explored move. The board and counters
//! are `Copy`, and the move history is an `im::Vector` so the copy stays O(1)
//! however long the game has run.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::MoveRecord;
use super::board::{Board, Cell};
use super::player::{Color, ColorMap};

/// Pieces each side starts with in hand.
pub const PIECES_PER_SIDE: u8 = 9;

/// A side with this many pieces on board flies; with fewer (and an empty hand) it has lost.
pub const FLYING_PIECES: u8 = 3;

/// Game stage.
///
/// The global phase is only ever `Placing` or `Moving`; `Flying` is a
/// per-color mobility phase. Serialized as the integers 1, 2 and 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Phase {
    Placing = 1,
    Moving = 2,
    Flying = 3,
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase as u8
    }
}

/// A phase number outside 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("phase must be 1, 2 or 3, got {0}")]
pub struct PhaseValueError(pub u8);

impl TryFrom<u8> for Phase {
    type Error = PhaseValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Phase::Placing),
            2 => Ok(Phase::Moving),
            3 => Ok(Phase::Flying),
            other => Err(PhaseValueError(other)),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placing => write!(f, "placing"),
            Phase::Moving => write!(f, "moving"),
            Phase::Flying => write!(f, "flying"),
        }
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) in_hand: ColorMap<u8>,
    pub(crate) on_board: ColorMap<u8>,
    pub(crate) current_player: Color,
    pub(crate) winner: Option<Color>,
    /// Set between completing a mill and capturing.
    pub(crate) pending_removal: bool,
    pub(crate) history: Vector<MoveRecord>,
    pub(crate) recording: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh match: empty board, nine pieces in each hand, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            in_hand: ColorMap::with_value(PIECES_PER_SIDE),
            on_board: ColorMap::with_value(0),
            current_player: Color::White,
            winner: None,
            pending_removal: false,
            history: Vector::new(),
            recording: true,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Contents of `point`, or `None` if it is off the board.
    #[must_use]
    pub fn cell(&self, point: usize) -> Option<Cell> {
        self.board.get(point)
    }

    #[must_use]
    pub fn pieces_in_hand(&self, color: Color) -> u8 {
        self.in_hand[color]
    }

    #[must_use]
    pub fn pieces_on_board(&self, color: Color) -> u8 {
        self.on_board[color]
    }

    /// The side whose action comes next.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether the side to move owes a capture.
    #[must_use]
    pub fn pending_removal(&self) -> bool {
        self.pending_removal
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Turn history recording on or off. Existing entries are kept.
    pub fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
    }

    /// Global phase: placing while either hand still holds pieces.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.in_hand[Color::White] > 0 || self.in_hand[Color::Black] > 0 {
            Phase::Placing
        } else {
            Phase::Moving
        }
    }

    /// Mobility phase of one side, derived from the current counters.
    #[must_use]
    pub fn mobility_phase(&self, color: Color) -> Phase {
        match self.phase() {
            Phase::Placing => Phase::Placing,
            _ if self.on_board[color] == FLYING_PIECES => Phase::Flying,
            _ => Phase::Moving,
        }
    }

    pub(crate) fn record(&mut self, record: MoveRecord) {
        if self.recording {
            self.history.push_back(record);
        }
    }

    pub(crate) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        for (color, hand) in self.in_hand.iter() {
            writeln!(
                f,
                "{color}: {hand} in hand, {} on board ({})",
                self.on_board[color],
                self.mobility_phase(color)
            )?;
        }
        match self.winner {
            Some(winner) => write!(f, "{winner} wins"),
            None if self.pending_removal => write!(f, "{} to capture", self.current_player),
            None => write!(f, "{} to move", self.current_player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.current_player(), Color::White);
        assert_eq!(state.pieces_in_hand(Color::White), 9);
        assert_eq!(state.pieces_in_hand(Color::Black), 9);
        assert_eq!(state.pieces_on_board(Color::White), 0);
        assert_eq!(state.phase(), Phase::Placing);
        assert_eq!(state.mobility_phase(Color::Black), Phase::Placing);
        assert!(!state.is_over());
        assert!(state.history().is_empty());
        assert!(state.is_recording());
    }

    #[test]
    fn test_phase_derivation_is_pure() {
        let mut state = GameState::new();
        state.in_hand = ColorMap::with_value(0);
        state.on_board[Color::White] = 3;
        state.on_board[Color::Black] = 5;

        assert_eq!(state.phase(), Phase::Moving);
        assert_eq!(state.mobility_phase(Color::White), Phase::Flying);
        assert_eq!(state.mobility_phase(Color::Black), Phase::Moving);

        // Reverts as soon as the count changes.
        state.on_board[Color::White] = 4;
        assert_eq!(state.mobility_phase(Color::White), Phase::Moving);

        // Three pieces during placing is not flying.
        state.in_hand[Color::Black] = 1;
        state.on_board[Color::White] = 3;
        assert_eq!(state.mobility_phase(Color::White), Phase::Placing);
    }

    #[test]
    fn test_record_respects_recording() {
        let mut state = GameState::new();
        let entry = MoveRecord::Place { position: 0, color: Color::White };

        state.record(entry);
        state.set_recording(false);
        state.record(entry);

        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new();
        state.record(MoveRecord::Place { position: 0, color: Color::White });

        let mut copy = state.clone();
        copy.record(MoveRecord::Place { position: 1, color: Color::Black });
        copy.switch_player();

        assert_eq!(state.history().len(), 1);
        assert_eq!(copy.history().len(), 2);
        assert_eq!(state.current_player(), Color::White);
    }

    #[test]
    fn test_phase_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Phase::Moving).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Phase>("3").unwrap(), Phase::Flying);
        assert!(serde_json::from_str::<Phase>("4").is_err());
        assert_eq!(Phase::try_from(0u8), Err(PhaseValueError(0)));
        assert_eq!(Phase::try_from(2u8), Ok(Phase::Moving));
    }
}
