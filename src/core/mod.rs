//! Core types: players, actions, values, RNG.
//!
//! These are game-agnostic. Games plug in through `RulesEngine` and the
//! search never looks past these types.

pub mod action;
pub mod player;
pub mod rng;
pub mod value;

pub use action::{Action, ActionList, ActionMask};
pub use player::PlayerId;
pub use rng::GameRng;
pub use value::{clamp_value, Value, DRAW, LOSS, WIN};
