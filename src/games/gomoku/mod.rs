//! Gomoku: five in a row on a 15x15 grid.
//!
//! - Black (player 0) and White (player 1) alternate placing stones
//! - A stone may go on any empty cell and never moves afterwards
//! - Five or more of one colour in a row, column or diagonal wins
//! - A full board without a line is a draw

mod engine;
mod layout;
mod line;
mod stone;

pub use engine::{GomokuEngine, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use layout::{format_layout, parse_layout};
pub use line::{find_winning_line, AXES, WIN_LENGTH};
pub use stone::Stone;
