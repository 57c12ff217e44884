//! Rules engine trait and its result types.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Win conditions
//!
//! The search calls into `RulesEngine` and never inspects the board rules
//! directly.

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::RulesEngine;
pub use error::RuleError;
pub use outcome::{Outcome, MILL_FORMED};
