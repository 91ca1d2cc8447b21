//! Game state: board, turn, history and status.
//!
//! ## GameState
//!
//! A `GameState` is a value. Engines never mutate a state they are handed;
//! an accepted move clones it, commits the move on the clone and returns the
//! clone. The board is small and the history is a persistent `im::Vector`, so
//! the clone is cheap.
//!
//! ## GameStatus
//!
//! Status is recomputed by the engine after every change. `Won` and `Draw`
//! are terminal: engines refuse further moves once either is reached.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::history::{Move, MoveHistory};
use super::player::PlayerId;
use super::position::Position;
use super::turn::TurnScheduler;

/// Five (or more) stones in a row, as produced by a winning Gomoku move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Positions ordered from the negative end of the axis to the positive end.
    pub positions: SmallVec<[Position; 5]>,

    /// The player who owns the line.
    pub player: PlayerId,
}

/// How a game was won.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    FiveInRow(WinningLine),
    Checkmate,
    /// The loser had no legal move while not in check.
    Stalemate,
    Timeout,
    Resignation,
}

/// How a game was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    /// Every cell is filled and nobody has a line.
    BoardFull,
    /// No legal move, no check, and stalemate is configured as a draw.
    Stalemate,
}

/// Reasons a game can be ended from outside the move flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForfeitReason {
    Timeout,
    Resignation,
}

impl From<ForfeitReason> for WinReason {
    fn from(reason: ForfeitReason) -> Self {
        match reason {
            ForfeitReason::Timeout => WinReason::Timeout,
            ForfeitReason::Resignation => WinReason::Resignation,
        }
    }
}

/// Where a game stands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// The active player's general is attacked but they can respond.
    Check { player: PlayerId },
    Won { winner: PlayerId, reason: WinReason },
    Draw { reason: DrawReason },
}

impl GameStatus {
    /// Check if no more moves may be played.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won { .. } | GameStatus::Draw { .. })
    }

    /// Collapse into the caller-facing win summary.
    #[must_use]
    pub fn win_status(&self) -> WinStatus {
        match self {
            GameStatus::Ongoing | GameStatus::Check { .. } => WinStatus::InProgress,
            GameStatus::Won { winner, reason } => WinStatus::Win {
                player: *winner,
                line: match reason {
                    WinReason::FiveInRow(line) => Some(line.clone()),
                    _ => None,
                },
            },
            GameStatus::Draw { .. } => WinStatus::Draw,
        }
    }
}

/// Win summary for banners and highlights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinStatus {
    /// No result yet.
    InProgress,
    /// `player` won. `line` is set for Gomoku wins.
    Win {
        player: PlayerId,
        line: Option<WinningLine>,
    },
    Draw,
}

/// A complete match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState<P: Clone> {
    board: Board<P>,

    /// Board at creation; replay starts here.
    initial: Board<P>,

    first_player: PlayerId,

    turns: TurnScheduler,

    history: MoveHistory<P>,

    status: GameStatus,
}

impl<P: Clone> GameState<P> {
    /// Create a state from a starting layout.
    ///
    /// The status starts `Ongoing`; engines recompute it right away.
    pub(crate) fn new(board: Board<P>, first_player: PlayerId) -> Self {
        Self {
            initial: board.clone(),
            board,
            first_player,
            turns: TurnScheduler::two_player(first_player),
            history: MoveHistory::new(),
            status: GameStatus::Ongoing,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    /// Board the game started from.
    #[must_use]
    pub fn initial_board(&self) -> &Board<P> {
        &self.initial
    }

    /// Player who moved first.
    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    /// Player to move.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turns.active_player()
    }

    /// Turn bookkeeping.
    #[must_use]
    pub fn turns(&self) -> &TurnScheduler {
        &self.turns
    }

    /// Committed moves.
    #[must_use]
    pub fn history(&self) -> &MoveHistory<P> {
        &self.history
    }

    /// The most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move<P>> {
        self.history.last()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Apply a validated move: board, history and turn in one step.
    pub(crate) fn commit(&mut self, mv: Move<P>) {
        mv.apply_to(&mut self.board);
        self.history.push(mv);
        self.turns.advance();
    }

    /// Take back the most recent move.
    pub(crate) fn rewind(&mut self) -> Option<Move<P>> {
        let mv = self.history.pop()?;
        mv.revert_on(&mut self.board);
        self.turns.retreat();
        Some(mv)
    }
}
