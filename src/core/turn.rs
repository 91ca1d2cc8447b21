//! Strict turn alternation.
//!
//! The scheduler only moves forward when an engine has accepted a move, and
//! only moves back when a move is undone. Rejected moves never touch it.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Tracks whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnScheduler {
    player_count: u8,
    active: PlayerId,
    /// Number of accepted moves since the scheduler was created.
    turns_taken: u32,
}

impl TurnScheduler {
    /// Create a scheduler for `player_count` players, `first` to move.
    #[must_use]
    pub fn new(player_count: usize, first: PlayerId) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");
        assert!(first.index() < player_count, "First player out of range");

        Self {
            player_count: player_count as u8,
            active: first,
            turns_taken: 0,
        }
    }

    /// Two-player scheduler.
    #[must_use]
    pub fn two_player(first: PlayerId) -> Self {
        Self::new(2, first)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Check if `player` may move now.
    #[must_use]
    pub fn is_active_player(&self, player: PlayerId) -> bool {
        self.active == player
    }

    /// Number of accepted moves since creation.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Hand the turn to the next player.
    pub fn advance(&mut self) {
        self.active = PlayerId((self.active.0 + 1) % self.player_count);
        self.turns_taken += 1;
    }

    /// Undo one `advance`.
    pub fn retreat(&mut self) {
        assert!(self.turns_taken > 0, "Cannot retreat before the first turn");
        self.active = PlayerId((self.active.0 + self.player_count - 1) % self.player_count);
        self.turns_taken -= 1;
    }
}
