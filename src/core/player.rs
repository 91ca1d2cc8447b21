//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe, 0-based player identifier. Both games are two-player, so
//! `PlayerId(0)` and `PlayerId(1)` are the only ids the engines hand out;
//! each game maps its colours onto them (`Stone::Black`/`Side::Red` are 0).
//!
//! ## Occupant
//!
//! Anything that can sit in a board cell and belongs to a player.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player of a two-player game.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use boardgame_rules::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A value that occupies a board cell and is owned by a player.
pub trait Occupant {
    /// The player this occupant belongs to.
    fn owner(&self) -> PlayerId;
}
