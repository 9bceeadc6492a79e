//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions produce the next position
//! - Win/loss conditions, from a fixed perspective

use serde::{Deserialize, Serialize};

use crate::core::action::{Action, ActionMask};
use crate::core::player::PlayerId;
use crate::core::value::{Value, DRAW, LOSS, WIN};

/// Result of a completed game, from one player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The perspective player won.
    Win,
    /// The perspective player lost.
    Loss,
    /// Nobody won.
    Draw,
}

impl GameResult {
    /// Value of this result on the search scale.
    #[must_use]
    pub fn value(self) -> Value {
        match self {
            GameResult::Win => WIN,
            GameResult::Loss => LOSS,
            GameResult::Draw => DRAW,
        }
    }

    /// The same result seen by the other player.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Rules engine trait.
///
/// The search calls these methods at every ply. It never interprets
/// positions itself.
///
/// ## Implementation Notes
///
/// - `valid_moves`: Return an all-clear mask if the player can't act
/// - `next_state`: Must be deterministic and must not mutate its input
/// - `outcome`: Return `None` while the game continues
///
/// Implementations are expected to be total over positions they produced.
/// A panic inside any method aborts the whole decision.
pub trait RulesEngine {
    /// Game position. Always kept in the canonical orientation.
    type Position;

    /// Size of the enumerable action space.
    fn action_size(&self) -> usize;

    /// Legality flag for every action, for `player` to move.
    fn valid_moves(&self, position: &Self::Position, player: PlayerId) -> ActionMask;

    /// Apply `action` for `player`, returning the new position and the next
    /// player to move.
    fn next_state(
        &self,
        position: &Self::Position,
        player: PlayerId,
        action: Action,
    ) -> (Self::Position, PlayerId);

    /// Outcome of the game from `perspective`'s point of view.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn outcome(&self, position: &Self::Position, perspective: PlayerId) -> Option<GameResult>;
}

impl<E: RulesEngine + ?Sized> RulesEngine for &E {
    type Position = E::Position;

    fn action_size(&self) -> usize {
        (**self).action_size()
    }

    fn valid_moves(&self, position: &Self::Position, player: PlayerId) -> ActionMask {
        (**self).valid_moves(position, player)
    }

    fn next_state(
        &self,
        position: &Self::Position,
        player: PlayerId,
        action: Action,
    ) -> (Self::Position, PlayerId) {
        (**self).next_state(position, player, action)
    }

    fn outcome(&self, position: &Self::Position, perspective: PlayerId) -> Option<GameResult> {
        (**self).outcome(position, perspective)
    }
}
