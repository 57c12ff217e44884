//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Every node owns its own `GameState` copy. History is persistent
//! (`im::Vector`), and the root copy has recording switched off, so copies are
//! cheap and the live game's history is never touched.

use std::time::Instant;

use log::{debug, warn};
use rayon::prelude::*;

use crate::core::{Action, Color, GameState};
use crate::games::morris::Morris;
use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::eval::evaluate;
use super::stats::SearchStats;

/// Window bound; larger than any evaluation.
pub const INF: i32 = i32::MAX / 2;

/// Alpha-beta search context.
///
/// Generic over the rules engine, defaulting to Nine Men's Morris.
#[derive(Debug)]
pub struct Searcher<E: RulesEngine = Morris> {
    engine: E,
    config: SearchConfig,
    pool: Option<rayon::ThreadPool>,
    stats: SearchStats,
}

impl<E: RulesEngine + Clone + Sync> Searcher<E> {
    /// Create a new search context.
    ///
    /// If a thread pool cannot be built the search stays sequential.
    pub fn new(engine: E, config: SearchConfig) -> Self {
        let pool = if config.is_parallel() {
            match rayon::ThreadPoolBuilder::new().num_threads(config.threads).build() {
                Ok(pool) => Some(pool),
                Err(err) => {
                    warn!("falling back to a sequential search: {err}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            engine,
            config,
            pool,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the latest `get_move`.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best action for the side to move, or `None` if it has no legal action.
    pub fn get_move(&mut self, state: &GameState) -> Option<Action> {
        self.best_move(state).map(|(action, _)| action)
    }

    /// Best action for the side to move together with its score.
    ///
    /// Ties go to the first action in enumeration order.
    pub fn best_move(&mut self, state: &GameState) -> Option<(Action, i32)> {
        let start = Instant::now();
        self.stats.reset();

        let perspective = state.current_player();
        let actions = self.engine.legal_actions(state, perspective);
        self.stats.root_moves = actions.len() as u32;
        if actions.is_empty() {
            return None;
        }

        let mut root = state.clone();
        root.set_recording(false);
        let depth = self.config.depth.max(1) - 1;

        let scores: Vec<Option<i32>> = match &self.pool {
            Some(pool) => {
                let (scores, worker_stats) =
                    pool.install(|| self.score_parallel(&root, &actions, depth, perspective));
                self.stats.absorb(&worker_stats);
                scores
            }
            None => actions
                .iter()
                .map(|action| self.score_root_move(&root, action, depth, perspective))
                .collect(),
        };

        let mut best: Option<(Action, i32)> = None;
        for (action, score) in actions.iter().zip(scores) {
            let Some(score) = score else { continue };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*action, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some((action, score)) = best {
            debug!(
                "{perspective}: {action} scores {score} ({} nodes, {} cutoffs, {} us)",
                self.stats.nodes, self.stats.cutoffs, self.stats.time_us
            );
        }
        best
    }

    /// Minimax value of `state` for `perspective`.
    ///
    /// `maximizing` must be true exactly when `perspective` is to move. A
    /// mill keeps the same side to move, so the flag is recomputed for each
    /// child rather than flipped.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        perspective: Color,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || self.engine.is_terminal(state).is_some() {
            return evaluate(state, perspective);
        }

        let to_move = state.current_player();
        debug_assert_eq!(maximizing, to_move == perspective);
        let actions = self.engine.legal_actions(state, to_move);
        if actions.is_empty() {
            return evaluate(state, perspective);
        }

        if maximizing {
            let mut best = -INF;
            for action in &actions {
                let Some(child) = self.child(state, action) else { continue };
                let child_max = child.current_player() == perspective;
                let score = self.minimax(&child, depth - 1, alpha, beta, child_max, perspective);
                best = best.max(score);
                if self.config.pruning {
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
            }
            best
        } else {
            let mut best = INF;
            for action in &actions {
                let Some(child) = self.child(state, action) else { continue };
                let child_max = child.current_player() == perspective;
                let score = self.minimax(&child, depth - 1, alpha, beta, child_max, perspective);
                best = best.min(score);
                if self.config.pruning {
                    beta = beta.min(best);
                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
            }
            best
        }
    }

    fn score_root_move(
        &mut self,
        root: &GameState,
        action: &Action,
        depth: u32,
        perspective: Color,
    ) -> Option<i32> {
        let child = self.child(root, action)?;
        let maximizing = child.current_player() == perspective;
        Some(self.minimax(&child, depth, -INF, INF, maximizing, perspective))
    }

    /// Score each root action on its own worker, preserving input order.
    fn score_parallel(
        &self,
        root: &GameState,
        actions: &[Action],
        depth: u32,
        perspective: Color,
    ) -> (Vec<Option<i32>>, SearchStats) {
        let config = self.config.clone().with_threads(1);
        let results: Vec<(Option<i32>, SearchStats)> = actions
            .par_iter()
            .map(|action| {
                let mut worker = Searcher::new(self.engine.clone(), config.clone());
                let score = worker.score_root_move(root, action, depth, perspective);
                (score, worker.stats)
            })
            .collect();

        let mut total = SearchStats::default();
        let scores = results
            .into_iter()
            .map(|(score, stats)| {
                total.absorb(&stats);
                score
            })
            .collect();
        (scores, total)
    }

    fn child(&self, state: &GameState, action: &Action) -> Option<GameState> {
        let mut child = state.clone();
        match self.engine.apply_action(&mut child, action) {
            Ok(_) => Some(child),
            Err(err) => {
                warn!("search skipped {action}: {err}");
                None
            }
        }
    }
}
