//! # rust-morris
//!
//! Nine Men's Morris rules engine with a minimax / alpha-beta opponent.
//!
//! ## Design Principles
//!
//! 1. **State is a value**: `GameState` is owned by the caller and passed by
//!    reference to the rules and the search. There is no global game object.
//!
//! 2. **Rejections never mutate**: every rule check runs before the first
//!    write, so a failed place/move/remove leaves the state untouched.
//!
//! 3. **Tagged outcomes**: the rules return `Outcome` variants. Human text
//!    like "Mill formed" only appears at the `Session` boundary.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: move history is an `im::Vector`, so the
//!   search can copy a state per node in O(1) for the history part.
//!
//! - **Deterministic search**: moves are enumerated in ascending point order
//!   and ties keep the first move seen, with or without the parallel root.
//!
//! ## Modules
//!
//! - `core`: colors, board geometry, actions, state, snapshots, RNG
//! - `rules`: `RulesEngine` trait, outcomes, rejection errors
//! - `games`: the Nine Men's Morris ruleset and its front-end `Session`
//! - `search`: alpha-beta searcher, evaluation, random mover

pub mod core;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Cell, Color, ColorMap, GameRng, GameState, MoveRecord, Phase, Snapshot,
    SnapshotError,
};

pub use crate::games::morris::{Morris, Report, Session};

pub use crate::rules::{Outcome, RuleError, RulesEngine};

pub use crate::search::{evaluate, Agent, RandomMover, SearchConfig, SearchStats, Searcher};
