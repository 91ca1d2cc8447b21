//! Core engine types: positions, players, board, history, turns, state.
//!
//! This module contains the building blocks shared by every game. Nothing in
//! here knows a single rule of Gomoku or Xiangqi.

pub mod position;
pub mod player;
pub mod board;
pub mod history;
pub mod turn;
pub mod config;
pub mod error;
pub mod state;

pub use position::Position;
pub use player::{Occupant, PlayerId};
pub use board::Board;
pub use history::{Move, MoveHistory, MoveRequest};
pub use turn::TurnScheduler;
pub use config::{GameConfig, GameKind, StalemateRule};
pub use error::{HistoryError, LayoutError, MoveError};
pub use state::{
    DrawReason, ForfeitReason, GameState, GameStatus, WinReason, WinStatus, WinningLine,
};
