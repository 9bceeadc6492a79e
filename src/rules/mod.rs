//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each position
//! - How actions produce the next position
//! - Win/loss conditions
//!
//! The search calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
