//! Adversarial search for Nine Men's Morris.
//!
//! ## Overview
//!
//! - **Minimax with alpha-beta pruning**, bounded only by depth
//! - **Optional root split**: root moves scored on a rayon pool, reduced in
//!   enumeration order so the answer matches the sequential search
//! - **Random mover**: seeded uniform choice, for tests and weak opponents
//!
//! ## Usage
//!
//! ```rust
//! use rust_morris::core::GameState;
//! use rust_morris::games::morris::Morris;
//! use rust_morris::search::{SearchConfig, Searcher};
//!
//! let mut search = Searcher::new(Morris, SearchConfig::default().with_depth(2));
//! let state = GameState::new();
//! if let Some(action) = search.get_move(&state) {
//!     println!("best: {action}");
//! }
//! ```

pub mod agent;
pub mod alphabeta;
pub mod config;
pub mod eval;
pub mod random;
pub mod stats;

pub use agent::Agent;
pub use alphabeta::{Searcher, INF};
pub use config::SearchConfig;
pub use eval::{evaluate, MILL_WEIGHT};
pub use random::RandomMover;
pub use stats::SearchStats;
