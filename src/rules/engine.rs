//! Rules engine trait.
//!
//! The search and the session drive games only through this trait:
//! - What actions are legal for a color
//! - How an action changes the state
//! - Whether the game is over

use crate::core::{Action, Color, GameState};

use super::error::RuleError;
use super::outcome::Outcome;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: return empty if the color cannot act
/// - `apply_action`: must be deterministic, and must leave the state
///   untouched when it returns `Err`
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// All legal actions for `color`, in a fixed order.
    fn legal_actions(&self, state: &GameState, color: Color) -> Vec<Action>;

    /// Apply an action on behalf of the side to move.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<Outcome, RuleError>;

    /// The winner, once the game has ended.
    fn is_terminal(&self, state: &GameState) -> Option<Color>;
}
