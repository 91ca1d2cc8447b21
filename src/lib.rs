//! # boardgame-rules
//!
//! Rule validation and terminal-state detection for two-player grid games:
//! Gomoku (five in a row) and Xiangqi (Chinese chess).
//!
//! ## Design Principles
//!
//! 1. **Validate, Then Commit**: A move is checked against every rule before
//!    anything changes. A rejected move leaves the state exactly as it was and
//!    says why.
//!
//! 2. **Shared Core, Game-Specific Rules**: Board, history, turn order and
//!    status are game-agnostic. Each game only supplies a `RulesEngine`.
//!
//! 3. **Configuration Over Convention**: Board size, starting layout, first
//!    player and rule variants come from `GameConfig`.
//!
//! ## Architecture
//!
//! - **Persistent History**: Moves are kept in an `im` vector, so cloning a
//!   state to produce the next one stays cheap.
//!
//! - **Recomputed Status**: Check, win and draw are derived from the board
//!   after every move, undo and replay; they are never patched incrementally.
//!
//! ## Modules
//!
//! - `core`: Positions, players, board, history, turns, state, configuration
//! - `rules`: `RulesEngine` trait with the shared commit/undo/replay flow
//! - `games`: Gomoku and Xiangqi engines
//! - `session`: `Match`, a single handle over either game

pub mod core;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Position, PlayerId, Occupant,
    Board, Move, MoveHistory, MoveRequest, TurnScheduler,
    GameConfig, GameKind, StalemateRule,
    HistoryError, LayoutError, MoveError,
    DrawReason, ForfeitReason, GameState, GameStatus, WinReason, WinStatus, WinningLine,
};

pub use crate::rules::RulesEngine;

pub use crate::games::gomoku::{GomokuEngine, Stone};
pub use crate::games::xiangqi::{CheckStatus, Piece, PieceId, PieceKind, Side, XiangqiEngine};

pub use crate::session::{new_game, Match};
