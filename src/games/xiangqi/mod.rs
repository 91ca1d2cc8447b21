//! Xiangqi (Chinese chess) on a 9-column, 10-row board.
//!
//! ## Rules covered
//!
//! - Per-piece movement: palace confinement, elephant eyes and the river,
//!   horse legs, chariot paths and cannon screens
//! - Check detection, optionally including the flying-general rule
//! - Moves that leave the mover's general attacked are refused
//! - Checkmate wins; stalemate loses by default or draws when configured
//!
//! Layouts are read and written as FEN; see [`parse_fen`].

mod engine;
mod fen;
pub mod movement;
mod piece;

pub use engine::{CheckStatus, XiangqiEngine};
pub use fen::{parse_fen, standard_board, to_fen, STANDARD_FEN};
pub use movement::{
    attackers, candidate_destinations, check_movement, general_position, in_check, pieces_between,
};
pub use piece::{Piece, PieceId, PieceKind, Side, COLS, ROWS};
