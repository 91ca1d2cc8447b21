//! Move records and the append-only move log.
//!
//! Every accepted move becomes a `Move` with a sequence number and is pushed
//! onto a `MoveHistory`. Records are never edited after they are appended;
//! undo works by dropping the last record and reverse-applying it to a board.
//!
//! The log is backed by `im::Vector` so cloning a `GameState` (which happens on
//! every accepted move) shares the history instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::PlayerId;
use super::position::Position;

/// A move request submitted by a caller.
///
/// - Gomoku placements have no source: `MoveRequest::place`.
/// - Xiangqi moves go from one cell to another: `MoveRequest::step`.
///
/// ```
/// use boardgame_rules::core::{MoveRequest, PlayerId, Position};
///
/// let place = MoveRequest::place(PlayerId::new(0), Position::new(7, 7));
/// assert!(place.from.is_none());
///
/// let step = MoveRequest::step(PlayerId::new(0), Position::new(0, 0), Position::new(4, 0));
/// assert_eq!(step.from, Some(Position::new(0, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// The player submitting the move.
    pub player: PlayerId,

    /// Source cell, `None` for placements.
    pub from: Option<Position>,

    /// Destination cell.
    pub to: Position,
}

impl MoveRequest {
    /// Place a new piece at `to`.
    #[must_use]
    pub const fn place(player: PlayerId, to: Position) -> Self {
        Self {
            player,
            from: None,
            to,
        }
    }

    /// Move the piece at `from` to `to`.
    #[must_use]
    pub const fn step(player: PlayerId, from: Position, to: Position) -> Self {
        Self {
            player,
            from: Some(from),
            to,
        }
    }
}

/// A committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move<P> {
    /// The player who made this move.
    pub player: PlayerId,

    /// Source cell, `None` for placements.
    pub from: Option<Position>,

    /// Destination cell.
    pub to: Position,

    /// The piece that moved (or was placed).
    pub piece: P,

    /// The opposing piece that stood on `to`, if any.
    pub captured: Option<P>,

    /// Position of this move in the game's history (0-based).
    pub sequence: u32,
}

impl<P> Move<P> {
    /// The request that produced this move.
    #[must_use]
    pub fn request(&self) -> MoveRequest {
        MoveRequest {
            player: self.player,
            from: self.from,
            to: self.to,
        }
    }

    /// Check if this move took a piece.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl<P: Clone> Move<P> {
    /// Apply this move to a board.
    pub fn apply_to(&self, board: &mut Board<P>) {
        match self.from {
            Some(from) => {
                board.move_piece(from, self.to);
            }
            None => {
                board.place(self.to, self.piece.clone());
            }
        }
    }

    /// Reverse this move on a board that it was just applied to.
    pub fn revert_on(&self, board: &mut Board<P>) {
        match self.from {
            Some(from) => {
                board.move_piece(self.to, from);
            }
            None => {
                board.remove(self.to);
            }
        }
        if let Some(captured) = &self.captured {
            board.place(self.to, captured.clone());
        }
    }
}

/// Append-only ordered log of committed moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory<P: Clone> {
    moves: Vector<Move<P>>,
}

impl<P: Clone> Default for MoveHistory<P> {
    fn default() -> Self {
        Self {
            moves: Vector::new(),
        }
    }
}

impl<P: Clone> MoveHistory<P> {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no move has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Sequence number the next appended move must carry.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.moves.len() as u32
    }

    /// Record a move.
    ///
    /// The move must carry `next_sequence()`.
    pub fn push(&mut self, mv: Move<P>) {
        assert_eq!(
            mv.sequence,
            self.next_sequence(),
            "Move sequence numbers must be contiguous"
        );
        self.moves.push_back(mv);
    }

    /// Drop and return the most recent move.
    pub(crate) fn pop(&mut self) -> Option<Move<P>> {
        self.moves.pop_back()
    }

    /// The most recent move.
    #[must_use]
    pub fn last(&self) -> Option<&Move<P>> {
        self.moves.last()
    }

    /// Get a move by sequence number.
    #[must_use]
    pub fn get(&self, sequence: usize) -> Option<&Move<P>> {
        self.moves.get(sequence)
    }

    /// Iterate over moves in the order they were played.
    pub fn iter(&self) -> impl Iterator<Item = &Move<P>> {
        self.moves.iter()
    }
}
