//! Presentation-layer contract.
//!
//! A `Session` owns one live game and answers each request with a `Report`:
//! a success flag and the message a player sees. This is the only place the
//! literal "Mill formed" text matters; inside the crate, callers match on
//! [`Outcome`] instead.

use std::path::Path;

use log::{debug, info};

use crate::core::{Action, Color, GameState, SnapshotError};
use crate::rules::{Outcome, RuleError, MILL_FORMED};

use super::game::Morris;

/// Answer to a single place, move or remove request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub success: bool,
    pub message: String,
}

impl Report {
    /// Whether the reply asks the player to capture a piece.
    #[must_use]
    pub fn mill_formed(&self) -> bool {
        self.success && self.message.starts_with(MILL_FORMED)
    }
}

impl From<Result<Outcome, RuleError>> for Report {
    fn from(result: Result<Outcome, RuleError>) -> Self {
        match result {
            Ok(outcome) => Self { success: true, message: outcome.to_string() },
            Err(err) => Self { success: false, message: err.to_string() },
        }
    }
}

/// One live game driven by a front end.
#[derive(Clone, Debug, Default)]
pub struct Session {
    rules: Morris,
    state: GameState,
}

impl Session {
    /// A fresh game, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self { rules: Morris, state }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> Morris {
        self.rules
    }

    pub fn place(&mut self, position: usize) -> Report {
        self.rules.place(&mut self.state, position).into()
    }

    pub fn move_piece(&mut self, from: usize, to: usize) -> Report {
        self.rules.move_piece(&mut self.state, from, to).into()
    }

    pub fn remove(&mut self, position: usize) -> Report {
        self.rules.remove(&mut self.state, position).into()
    }

    /// Apply any action, typed or chosen by the search.
    pub fn apply(&mut self, action: &Action) -> Report {
        self.rules.apply(&mut self.state, action).into()
    }

    pub fn get_possible_moves(&self, color: Color) -> Vec<Action> {
        self.rules.legal_moves(&self.state, color)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }

    /// Write the game to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        self.state.save(path.as_ref())?;
        info!("saved game to {}", path.as_ref().display());
        Ok(())
    }

    /// Replace the game with the one saved at `path`.
    ///
    /// On error the current game is kept unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let state = GameState::load(path.as_ref())?;
        info!("loaded game from {}", path.as_ref().display());
        self.state = state;
        Ok(())
    }

    /// The position after the first `plies` recorded moves.
    ///
    /// `plies` is clamped to the history length. The live game is untouched.
    pub fn replay_to(&self, plies: usize) -> Result<GameState, RuleError> {
        let plies = plies.min(self.state.history().len());
        debug!("replaying {plies} of {} moves", self.state.history().len());
        self.rules.replay(self.state.history().iter().take(plies))
    }
}
