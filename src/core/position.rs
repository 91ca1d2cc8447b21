//! Board coordinates.
//!
//! A `Position` is a `(row, col)` pair. Positions carry no board dimensions:
//! whether a position is valid is decided by `Board::is_within_bounds`.

use serde::{Deserialize, Serialize};

/// A cell coordinate on a rectangular board.
///
/// ```
/// use boardgame_rules::core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.offset(1, -1), Some(Position::new(3, 0)));
/// assert_eq!(pos.offset(0, -2), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Shift by a signed delta.
    ///
    /// Returns `None` if either coordinate would become negative or overflow.
    /// The upper board edge is not checked here.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }

    /// Signed `(row, col)` delta from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: Position) -> (i16, i16) {
        (
            i16::from(other.row) - i16::from(self.row),
            i16::from(other.col) - i16::from(self.col),
        )
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
