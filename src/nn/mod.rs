//! Position evaluation for the search.
//!
//! The search only needs an `Evaluator`: a scalar estimate per position.
//! This module also provides the plumbing to back that estimate with a
//! learned policy-value network.
//!
//! ## Overview
//!
//! - **Traits**: `Evaluator`, `PolicyValueNetwork`, `StateEncoder`
//! - **Adapters**: `NetworkEvaluator` keeps the value head of a network,
//!   `FallibleEvaluator` wraps value functions that can fail
//! - **Baseline**: `ZeroValue`, `ZeroEncoder` for testing
//!
//! ## Usage
//!
//! ```rust
//! use rust_alphabeta::games::tictactoe::{Board, TicTacToeEncoder};
//! use rust_alphabeta::nn::{Evaluator, NetworkEvaluator, ZeroValue};
//!
//! let evaluator: NetworkEvaluator<Board, _, _> =
//!     NetworkEvaluator::new(TicTacToeEncoder::new(3), ZeroValue::new(9));
//! assert_eq!(evaluator.evaluate(&Board::new(3)), 0.0);
//! ```

pub mod encoder;
pub mod traits;

// Re-export main types
pub use encoder::{StateEncoder, ZeroEncoder};
pub use traits::{
    EncodedState, Evaluator, FallibleEvaluator, NetworkEvaluator, PolicyValueNetwork, ZeroValue,
};
