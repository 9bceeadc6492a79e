//! Depth-limited alpha-beta search in a fixed perspective.
//!
//! Values are never negated between plies. Every score is read from the
//! canonical player's point of view: plies where the canonical player moves
//! take the maximum over children, the opponent's plies take the minimum.
//!
//! Pruning is one-sided. Each node tightens a single running bound (`beta`)
//! with the ply's own fold operator and compares it with the `alpha` it was
//! handed. `alpha` itself is never tightened, so it stays at the root value
//! `LOSS` on every path. A cut therefore only happens once a minimizing node
//! has found a proven loss, and pruned values are exactly those of the
//! unpruned search.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::{Action, PlayerId, Value, LOSS, WIN};
use crate::nn::Evaluator;
use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::error::SearchError;
use super::moves::legal_actions;
use super::stats::SearchStats;

/// Optimizer for one ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ply {
    /// Canonical player to move.
    Max,
    /// Opponent to move.
    Min,
}

impl Ply {
    /// Ply type for `player` to move.
    #[must_use]
    pub fn for_player(player: PlayerId) -> Self {
        if player.is_canonical() {
            Ply::Max
        } else {
            Ply::Min
        }
    }

    /// Worst possible value for this ply's optimizer.
    #[must_use]
    pub fn worst(self) -> Value {
        match self {
            Ply::Max => LOSS,
            Ply::Min => WIN,
        }
    }

    /// Combine two values with this ply's operator.
    #[must_use]
    pub fn fold(self, a: Value, b: Value) -> Value {
        match self {
            Ply::Max => a.max(b),
            Ply::Min => a.min(b),
        }
    }
}

/// Best root action seen so far.
///
/// Ties go to the later action; a proven win ends the scan.
#[derive(Clone, Copy, Debug)]
struct RootChoice {
    action: Option<Action>,
    value: Value,
}

impl RootChoice {
    fn new() -> Self {
        Self {
            action: None,
            value: Value::NEG_INFINITY,
        }
    }

    /// Record a searched root action. Returns true on a proven win.
    fn offer(&mut self, action: Action, value: Value) -> bool {
        if value == WIN {
            self.action = Some(action);
            self.value = value;
            return true;
        }
        if value >= self.value {
            self.action = Some(action);
            self.value = value;
        }
        false
    }
}

/// Per-decision search state.
///
/// Borrows the collaborators and owns the counters, so independent root
/// branches can each run their own.
struct Searcher<'a, E: RulesEngine, V> {
    engine: &'a E,
    evaluator: &'a V,
    pruning: bool,
    stats: SearchStats,
}

impl<'a, E, V> Searcher<'a, E, V>
where
    E: RulesEngine,
    V: Evaluator<E::Position>,
{
    fn new(engine: &'a E, evaluator: &'a V, pruning: bool) -> Self {
        Self {
            engine,
            evaluator,
            pruning,
            stats: SearchStats::default(),
        }
    }

    /// Value of `position` with `player` to move, searched `depth` plies.
    fn search(
        &mut self,
        position: &E::Position,
        player: PlayerId,
        depth: i32,
        alpha: Value,
        beta: Value,
    ) -> Value {
        self.stats.nodes += 1;

        if let Some(result) = self.engine.outcome(position, PlayerId::CANONICAL) {
            self.stats.terminal_nodes += 1;
            return result.value();
        }

        if depth <= 0 {
            self.stats.leaf_evaluations += 1;
            return self.evaluator.evaluate(position);
        }

        self.best_value(position, player, Ply::for_player(player), depth - 1, alpha, beta)
    }

    /// Fold the children of an internal node with the ply's operator.
    fn best_value(
        &mut self,
        position: &E::Position,
        player: PlayerId,
        ply: Ply,
        child_depth: i32,
        alpha: Value,
        mut beta: Value,
    ) -> Value {
        let mut best = ply.worst();

        for action in legal_actions(self.engine, position, player) {
            if self.aborted() {
                break;
            }

            let (child, next_player) = self.engine.next_state(position, player, action);
            let value = self.search(&child, next_player, child_depth, alpha, beta);

            best = ply.fold(best, value);
            beta = ply.fold(beta, best);

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                return best;
            }
        }

        best
    }

    /// True once the evaluator has asked the decision to stop.
    fn aborted(&self) -> bool {
        self.evaluator.aborted()
    }

    /// Search one root action. The root is always the canonical player's move.
    fn root_branch(&mut self, root: &E::Position, action: Action, depth: i32) -> Value {
        let (child, next_player) = self.engine.next_state(root, PlayerId::CANONICAL, action);
        self.stats.root_branches += 1;
        self.search(&child, next_player, depth, LOSS, WIN)
    }
}

/// Alpha-beta decision maker.
///
/// Generic over the rules engine and the evaluator. Owns both, plus the
/// configuration and the statistics of the last decision.
///
/// ## Example
///
/// ```
/// use rust_alphabeta::core::Action;
/// use rust_alphabeta::games::tictactoe::{Board, LineHeuristic, TicTacToe};
/// use rust_alphabeta::search::{AlphaBeta, SearchConfig};
///
/// let mut search = AlphaBeta::new(
///     TicTacToe::new(3),
///     LineHeuristic::new(3),
///     SearchConfig::default().with_max_depth(3),
/// )
/// .unwrap();
///
/// // X completes the middle row.
/// let board: Board = ".../XX./OO.".parse().unwrap();
/// assert_eq!(search.choose_action(&board), Some(Action::new(5)));
/// ```
pub struct AlphaBeta<E, V> {
    engine: E,
    evaluator: V,
    config: SearchConfig,
    stats: SearchStats,
}

impl<E, V> AlphaBeta<E, V>
where
    E: RulesEngine,
    V: Evaluator<E::Position>,
{
    /// Create a new search after validating the configuration.
    pub fn new(engine: E, evaluator: V, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;

        Ok(Self {
            engine,
            evaluator,
            config,
            stats: SearchStats::default(),
        })
    }

    /// Pick the best action for the canonical player at `root`.
    ///
    /// `root` must already be in the canonical orientation. Returns `None`
    /// only if the position has no legal actions, which callers should
    /// rule out beforehand.
    ///
    /// If the evaluator aborts, the search unwinds at once and the returned
    /// action carries no meaning.
    pub fn choose_action(&mut self, root: &E::Position) -> Option<Action> {
        let start = Instant::now();
        self.stats.reset();

        let actions = legal_actions(&self.engine, root, PlayerId::CANONICAL);

        match actions.as_slice() {
            [] => {
                warn!("choose_action called on a position with no legal actions");
                return None;
            }
            [only] => {
                debug!(action = %only, "single legal action, search skipped");
                return Some(*only);
            }
            _ => {}
        }

        let depth = self.child_depth();
        let mut searcher = Searcher::new(&self.engine, &self.evaluator, self.config.pruning);
        let mut choice = RootChoice::new();

        for &action in &actions {
            let value = searcher.root_branch(root, action, depth);
            if searcher.aborted() {
                debug!(action = %action, "evaluator failed, decision abandoned");
                break;
            }
            trace!(action = %action, value, "root branch searched");

            if choice.offer(action, value) {
                debug!(action = %action, "proven win, remaining root actions skipped");
                break;
            }
        }

        let stats = searcher.stats;
        self.finish(stats, start, &choice, actions.len());
        choice.action
    }

    /// Value of every root action, in enumeration order.
    ///
    /// Unlike `choose_action`, this searches every action, even a single one
    /// or one after a proven win. An aborting evaluator ends the list early.
    pub fn analyze(&mut self, root: &E::Position) -> Vec<(Action, Value)> {
        let start = Instant::now();
        self.stats.reset();

        let depth = self.child_depth();
        let mut searcher = Searcher::new(&self.engine, &self.evaluator, self.config.pruning);

        let mut values = Vec::new();
        for action in legal_actions(&self.engine, root, PlayerId::CANONICAL) {
            values.push((action, searcher.root_branch(root, action, depth)));
            if searcher.aborted() {
                break;
            }
        }

        self.stats = searcher.stats;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        values
    }

    /// Run the recursive search directly on one position.
    ///
    /// Terminal positions return their outcome at any depth, including zero
    /// or negative depths. Non-terminal positions at `depth <= 0` return the
    /// evaluator's estimate unchanged.
    pub fn evaluate(
        &mut self,
        position: &E::Position,
        player: PlayerId,
        depth: i32,
        alpha: Value,
        beta: Value,
    ) -> Value {
        let mut searcher = Searcher::new(&self.engine, &self.evaluator, self.config.pruning);
        let value = searcher.search(position, player, depth, alpha, beta);
        self.stats = searcher.stats;
        value
    }

    /// Depth handed to each root branch.
    fn child_depth(&self) -> i32 {
        // validate() caps max_depth at MAX_SEARCH_DEPTH
        self.config.max_depth as i32 - 1
    }

    fn finish(&mut self, stats: SearchStats, start: Instant, choice: &RootChoice, root_actions: usize) {
        self.stats = stats;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            depth = self.config.max_depth,
            root_actions,
            action = ?choice.action,
            value = choice.value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search complete"
        );
    }

    /// Get statistics for the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the engine reference.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get the evaluator reference.
    pub fn evaluator(&self) -> &V {
        &self.evaluator
    }
}

#[cfg(feature = "parallel")]
impl<E, V> AlphaBeta<E, V>
where
    E: RulesEngine + Sync,
    E::Position: Send + Sync,
    V: Evaluator<E::Position> + Sync,
{
    /// `choose_action` with root branches searched on the rayon pool.
    ///
    /// Every root branch is searched, then the results are scanned in
    /// enumeration order with the sequential policy, so the chosen action
    /// is the same as `choose_action`'s.
    pub fn choose_action_parallel(&mut self, root: &E::Position) -> Option<Action> {
        use rayon::prelude::*;

        let start = Instant::now();
        self.stats.reset();

        let actions = legal_actions(&self.engine, root, PlayerId::CANONICAL);

        match actions.as_slice() {
            [] => {
                warn!("choose_action_parallel called on a position with no legal actions");
                return None;
            }
            [only] => {
                debug!(action = %only, "single legal action, search skipped");
                return Some(*only);
            }
            _ => {}
        }

        let depth = self.child_depth();
        let engine = &self.engine;
        let evaluator = &self.evaluator;
        let pruning = self.config.pruning;

        let branches: Vec<(Action, Value, SearchStats)> = actions
            .par_iter()
            .map(|&action| {
                let mut searcher = Searcher::new(engine, evaluator, pruning);
                let value = searcher.root_branch(root, action, depth);
                (action, value, searcher.stats)
            })
            .collect();

        let mut stats = SearchStats::default();
        let mut choice = RootChoice::new();
        for (action, value, branch_stats) in &branches {
            stats.merge(branch_stats);
            if choice.offer(*action, *value) {
                break;
            }
        }

        self.finish(stats, start, &choice, actions.len());
        choice.action
    }
}
