//! Game configuration types.
//!
//! A `GameConfig` selects the game and its rule variants. Hosts build one with
//! `GameConfig::gomoku()` / `GameConfig::xiangqi()` and the `with_*` builders,
//! or deserialize it from JSON.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Which game a configuration describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    /// Five-in-a-row on a square grid.
    Gomoku,
    /// Chinese chess on a 9x10 grid.
    Xiangqi,
}

impl GameKind {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::Gomoku => "gomoku",
            GameKind::Xiangqi => "xiangqi",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a Xiangqi position with no legal moves (and no check) ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalemateRule {
    /// The stalled player loses.
    #[default]
    Loss,
    /// The game is drawn.
    Draw,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The game to play.
    pub kind: GameKind,

    /// Side length of the Gomoku board. `None` for the default of 15.
    /// Ignored by Xiangqi.
    #[serde(default)]
    pub board_size: Option<u8>,

    /// Non-default starting layout.
    ///
    /// - Xiangqi: FEN, optionally followed by a side-to-move field.
    /// - Gomoku: rows from row 0 separated by `/`, using `.`, `x` (black)
    ///   and `o` (white).
    #[serde(default)]
    pub layout: Option<String>,

    /// Player to move first. Overridden by a FEN side-to-move field.
    #[serde(default)]
    pub first_player: Option<PlayerId>,

    /// Forbid the two generals facing each other on an open file.
    #[serde(default = "default_flying_general")]
    pub flying_general: bool,

    /// Outcome of a Xiangqi stalemate.
    #[serde(default)]
    pub stalemate: StalemateRule,
}

fn default_flying_general() -> bool {
    true
}

impl GameConfig {
    /// Create a configuration with default rules for `kind`.
    #[must_use]
    pub fn new(kind: GameKind) -> Self {
        Self {
            kind,
            board_size: None,
            layout: None,
            first_player: None,
            flying_general: true,
            stalemate: StalemateRule::default(),
        }
    }

    /// Standard 15x15 Gomoku.
    #[must_use]
    pub fn gomoku() -> Self {
        Self::new(GameKind::Gomoku)
    }

    /// Standard Xiangqi.
    #[must_use]
    pub fn xiangqi() -> Self {
        Self::new(GameKind::Xiangqi)
    }

    /// Set the Gomoku board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        self.board_size = Some(size);
        self
    }

    /// Start from a custom layout.
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Set the first player.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Enable or disable the flying-general rule.
    #[must_use]
    pub fn with_flying_general(mut self, enabled: bool) -> Self {
        self.flying_general = enabled;
        self
    }

    /// Set the stalemate outcome.
    #[must_use]
    pub fn with_stalemate(mut self, rule: StalemateRule) -> Self {
        self.stalemate = rule;
        self
    }
}
