//! Depth-limited adversarial search.
//!
//! ## Overview
//!
//! - **Move enumeration**: `legal_actions` reads the rules engine's mask
//! - **Adversarial search**: fixed-perspective min/max recursion with a
//!   one-sided pruning bound
//! - **Root selection**: `AlphaBeta::choose_action` searches each root action,
//!   keeps the last of equally valued actions, and stops at a proven win
//!
//! ## Usage
//!
//! ```rust
//! use rust_alphabeta::games::tictactoe::{Board, LineHeuristic, TicTacToe};
//! use rust_alphabeta::search::{AlphaBeta, SearchConfig};
//!
//! let config = SearchConfig::default().with_max_depth(4);
//! let mut search = AlphaBeta::new(TicTacToe::new(3), LineHeuristic::new(3), config).unwrap();
//!
//! let action = search.choose_action(&Board::new(3));
//! assert!(action.is_some());
//! println!("nodes searched: {}", search.stats().nodes);
//! ```

pub mod alpha_beta;
pub mod config;
pub mod error;
pub mod moves;
pub mod stats;

// Re-export main types
pub use alpha_beta::{AlphaBeta, Ply};
pub use config::{SearchConfig, MAX_SEARCH_DEPTH};
pub use error::SearchError;
pub use moves::legal_actions;
pub use stats::SearchStats;
