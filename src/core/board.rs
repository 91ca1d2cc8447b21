//! Fixed-size board grid.
//!
//! `Board<P>` is an arena of cells laid out row-major in a single `Vec`.
//! It knows nothing about rules: placing, removing and moving are plain grid
//! mutations, and legality is the engines' responsibility.
//!
//! ## Usage
//!
//! ```
//! use boardgame_rules::core::{Board, Position};
//!
//! let mut board: Board<char> = Board::new(3, 3);
//! board.place(Position::new(0, 0), 'x');
//!
//! let captured = board.move_piece(Position::new(0, 0), Position::new(1, 1));
//! assert_eq!(captured, None);
//! assert_eq!(board.occupant(Position::new(1, 1)), Some(&'x'));
//! assert!(board.occupant(Position::new(0, 0)).is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A rectangular grid where each cell holds at most one `P`.
///
/// Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board<P> {
    rows: u8,
    cols: u8,
    cells: Vec<Option<P>>,
}

impl<P> Board<P> {
    /// Create an empty board.
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");

        let cells = std::iter::repeat_with(|| None)
            .take(rows as usize * cols as usize)
            .collect();

        Self { rows, cols, cells }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Check if a position lies on this board.
    #[must_use]
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.is_within_bounds(pos)
            .then(|| pos.row as usize * self.cols as usize + pos.col as usize)
    }

    fn index_or_panic(&self, pos: Position) -> usize {
        match self.index(pos) {
            Some(idx) => idx,
            None => panic!(
                "Position {} outside {}x{} board",
                pos, self.rows, self.cols
            ),
        }
    }

    /// Get the occupant of a cell.
    ///
    /// Out-of-bounds positions are simply empty.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<&P> {
        self.index(pos).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Check if a cell is empty. Out-of-bounds positions count as empty.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.occupant(pos).is_none()
    }

    /// Put a piece on a cell, returning whatever was there.
    ///
    /// Panics if `pos` is off the board.
    pub fn place(&mut self, pos: Position, piece: P) -> Option<P> {
        let idx = self.index_or_panic(pos);
        self.cells[idx].replace(piece)
    }

    /// Clear a cell, returning its occupant.
    ///
    /// Panics if `pos` is off the board.
    pub fn remove(&mut self, pos: Position) -> Option<P> {
        let idx = self.index_or_panic(pos);
        self.cells[idx].take()
    }

    /// Move the occupant of `from` to `to`.
    ///
    /// Returns the previous occupant of `to` (the captured piece, if any).
    /// Moving from an empty cell clears `to`.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<P> {
        let from_idx = self.index_or_panic(from);
        let to_idx = self.index_or_panic(to);
        if from_idx == to_idx {
            return None;
        }

        let moving = self.cells[from_idx].take();
        std::mem::replace(&mut self.cells[to_idx], moving)
    }

    /// Iterate over occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &P)> {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|piece| (Position::new((idx / cols) as u8, (idx % cols) as u8), piece))
        })
    }

    /// Iterate over every position on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}
