//! Xiangqi pieces and board geometry.
//!
//! ## Orientation
//!
//! The board has 10 rows and 9 columns. Red's back rank is row 0 and Black's
//! is row 9; the river runs between rows 4 and 5. Each palace spans columns
//! 3-5 and the three rows nearest its owner's back rank.

use serde::{Deserialize, Serialize};

use crate::core::{Occupant, PlayerId, Position};

/// Number of rows on a Xiangqi board.
pub const ROWS: u8 = 10;

/// Number of columns on a Xiangqi board.
pub const COLS: u8 = 9;

/// A player's colour. Red moves first and is player 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    /// The side a player controls.
    #[must_use]
    pub const fn for_player(player: PlayerId) -> Self {
        if player.0 == 0 {
            Side::Red
        } else {
            Side::Black
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of a forward step.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Black => -1,
        }
    }

    /// Check if `row` is on this side of the river.
    #[must_use]
    pub const fn owns_row(self, row: u8) -> bool {
        match self {
            Side::Red => row <= 4,
            Side::Black => row >= 5,
        }
    }

    /// Check if `pos` lies inside this side's palace.
    #[must_use]
    pub const fn palace_contains(self, pos: Position) -> bool {
        let rows_ok = match self {
            Side::Red => pos.row <= 2,
            Side::Black => pos.row >= 7 && pos.row < ROWS,
        };
        rows_ok && pos.col >= 3 && pos.col <= 5
    }
}

impl From<Side> for PlayerId {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => PlayerId::new(0),
            Side::Black => PlayerId::new(1),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => f.write_str("red"),
            Side::Black => f.write_str("black"),
        }
    }
}

/// The seven piece types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Horse,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    /// Lowercase FEN letter.
    #[must_use]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::General => 'k',
            PieceKind::Advisor => 'a',
            PieceKind::Elephant => 'b',
            PieceKind::Horse => 'n',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        }
    }

    /// Parse a FEN letter (either case). Accepts the common `e`/`h` aliases.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::General),
            'a' => Some(PieceKind::Advisor),
            'b' | 'e' => Some(PieceKind::Elephant),
            'n' | 'h' => Some(PieceKind::Horse),
            'r' => Some(PieceKind::Chariot),
            'c' => Some(PieceKind::Cannon),
            'p' => Some(PieceKind::Soldier),
            _ => None,
        }
    }
}

/// Distinguishes pieces of the same kind and side within one layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

/// A Xiangqi piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub id: PieceId,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, side: Side, id: PieceId) -> Self {
        Self { kind, side, id }
    }

    /// FEN letter: uppercase for red, lowercase for black.
    #[must_use]
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.side {
            Side::Red => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Check if `other` belongs to the opposing side.
    #[must_use]
    pub fn is_enemy_of(self, other: &Piece) -> bool {
        self.side != other.side
    }
}

impl Occupant for Piece {
    fn owner(&self) -> PlayerId {
        self.side.into()
    }
}
