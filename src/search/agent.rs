//! Anything that can choose a move for the side to move.

use crate::core::{Action, GameState};
use crate::rules::RulesEngine;

use super::alphabeta::Searcher;
use super::random::RandomMover;

/// Move source for a seat at the table.
///
/// Lets drivers mix search and random players behind one type.
pub trait Agent {
    /// Choose an action for `state.current_player()`, or `None` if it has none.
    fn select(&mut self, state: &GameState) -> Option<Action>;

    /// Short label for logs.
    fn name(&self) -> String;
}

impl<E: RulesEngine + Clone + Sync> Agent for Searcher<E> {
    fn select(&mut self, state: &GameState) -> Option<Action> {
        self.get_move(state)
    }

    fn name(&self) -> String {
        format!("alphabeta(depth {})", self.config().depth)
    }
}

impl<E: RulesEngine> Agent for RandomMover<E> {
    fn select(&mut self, state: &GameState) -> Option<Action> {
        self.get_move(state)
    }

    fn name(&self) -> String {
        format!("random(seed {})", self.seed())
    }
}
