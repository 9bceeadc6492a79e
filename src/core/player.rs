//! Player identification for two-player games.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Player 0 is the canonical player: the one
//! whose perspective every score is read from during a decision. Player 1
//! is its opponent.

use serde::{Deserialize, Serialize};

/// Player identifier for a two-player game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The canonical player, to move at the root of every decision.
    pub const CANONICAL: PlayerId = PlayerId(0);

    /// The canonical player's opponent.
    pub const OPPONENT: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        debug_assert!(id < 2, "Only two players are supported");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the canonical player.
    #[must_use]
    pub const fn is_canonical(self) -> bool {
        self.0 == Self::CANONICAL.0
    }

    /// The other player.
    ///
    /// ```
    /// use rust_alphabeta::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::CANONICAL.opponent(), PlayerId::OPPONENT);
    /// assert_eq!(PlayerId::OPPONENT.opponent(), PlayerId::CANONICAL);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
