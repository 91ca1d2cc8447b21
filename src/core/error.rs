//! Error types returned across the engine boundary.
//!
//! Every error here is recoverable: a rejected move or failed history
//! operation leaves the input state untouched and the caller may simply try
//! something else.

use super::player::PlayerId;
use super::position::Position;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: PlayerId, actual: PlayerId },

    #[error("no piece of the moving player at the source cell")]
    NoPieceAtSource,

    #[error("the piece cannot move that way")]
    IllegalPieceMovement,

    #[error("the path is blocked")]
    PathBlocked,

    #[error("the move would leave the mover's general in check")]
    MoveLeavesGeneralInCheck,

    #[error("the game has already ended")]
    GameAlreadyEnded,

    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),
}

/// Why an undo or replay failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("there is no move to undo")]
    NothingToUndo,

    #[error("cannot replay {requested} moves from a history of {len}")]
    OutOfRange { requested: usize, len: usize },

    #[error("move {sequence} no longer validates: {source}")]
    Diverged { sequence: u32, source: MoveError },

    #[error("move {sequence} replayed differently from its record")]
    Mismatch { sequence: u32 },
}

/// Why a starting layout or configuration was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected {expected} rows, got {actual}")]
    WrongRowCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    WrongRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid layout character: '{0}'")]
    InvalidCharacter(char),

    #[error("invalid side-to-move field: '{0}'")]
    InvalidSideToMove(String),

    #[error("{side} has {count} generals")]
    GeneralCount { side: PlayerId, count: usize },

    #[error("general at {0} is outside its palace")]
    GeneralOutsidePalace(Position),

    #[error("board size {0} is not supported")]
    UnsupportedBoardSize(u8),

    #[error("configuration is for {actual}, engine plays {expected}")]
    WrongGameKind {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),

    #[error("{0} is in check but not to move")]
    OpponentInCheck(PlayerId),

    #[error("{0} already has five in a row")]
    AlreadyWon(PlayerId),
}
