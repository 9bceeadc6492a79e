//! # rust-alphabeta
//!
//! Depth-limited alpha-beta search for two-player, turn-based,
//! zero-sum games.
//!
//! ## Design Principles
//!
//! 1. **Fixed Perspective**: Every score is read from the canonical player's
//!    point of view. Plies alternate between maximizing and minimizing
//!    rather than negating scores.
//!
//! 2. **Game-Agnostic**: Games plug in through `RulesEngine`, position
//!    estimates through `Evaluator`. The search never looks inside either.
//!
//! 3. **Pure Decisions**: A decision reads the engine and evaluator and
//!    nothing else. The same inputs always give the same action.
//!
//! ## Modules
//!
//! - `core`: Players, actions, values, RNG
//! - `rules`: RulesEngine trait for game implementations
//! - `nn`: Evaluator trait and neural network adapter
//! - `search`: Move enumeration, adversarial search, root selection
//! - `games`: Reference games (tic-tac-toe, explicit trees)

pub mod core;
pub mod games;
pub mod nn;
pub mod rules;
pub mod search;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionList, ActionMask, GameRng, PlayerId, Value, DRAW, LOSS, WIN,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::nn::{
    EncodedState, Evaluator, FallibleEvaluator, NetworkEvaluator, PolicyValueNetwork, StateEncoder,
};

pub use crate::search::{
    legal_actions, AlphaBeta, Ply, SearchConfig, SearchError, SearchStats, MAX_SEARCH_DEPTH,
};
