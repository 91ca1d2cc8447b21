use serde::{Deserialize, Serialize};

use crate::core::{Occupant, PlayerId};

/// A Gomoku stone. Black moves first and is player 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// The stone colour a player places.
    #[must_use]
    pub const fn for_player(player: PlayerId) -> Self {
        if player.0 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// Layout character: `x` for black, `o` for white.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Stone::Black => 'x',
            Stone::White => 'o',
        }
    }

    /// Parse a layout character.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' | 'b' => Some(Stone::Black),
            'o' | 'w' => Some(Stone::White),
            _ => None,
        }
    }
}

impl Occupant for Stone {
    fn owner(&self) -> PlayerId {
        PlayerId::from(*self)
    }
}

impl From<Stone> for PlayerId {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => PlayerId::new(0),
            Stone::White => PlayerId::new(1),
        }
    }
}
