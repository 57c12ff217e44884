//! Uniform random opponent.

use crate::core::{Action, GameRng, GameState};
use crate::games::morris::Morris;
use crate::rules::RulesEngine;

/// Picks a uniformly random legal action from a seeded generator.
///
/// The same seed and the same sequence of positions give the same choices.
#[derive(Clone, Debug)]
pub struct RandomMover<E: RulesEngine = Morris> {
    engine: E,
    rng: GameRng,
}

impl<E: RulesEngine> RandomMover<E> {
    pub fn new(engine: E, seed: u64) -> Self {
        Self { engine, rng: GameRng::new(seed) }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// A random legal action for the side to move.
    pub fn get_move(&mut self, state: &GameState) -> Option<Action> {
        let actions = self.engine.legal_actions(state, state.current_player());
        self.rng.choose(&actions).copied()
    }
}
