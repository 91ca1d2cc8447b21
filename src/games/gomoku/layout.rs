//! Text layouts for Gomoku boards.
//!
//! Rows are listed from row 0 and separated by `/`. Each row has exactly one
//! character per column: `.` for empty, `x` for black, `o` for white.
//! Whitespace around rows is ignored.

use crate::core::{Board, LayoutError, Position};

use super::Stone;

/// Parse a layout for a `size`x`size` board.
pub fn parse_layout(text: &str, size: u8) -> Result<Board<Stone>, LayoutError> {
    let rows: Vec<&str> = text.trim().split('/').map(str::trim).collect();
    if rows.len() != size as usize {
        return Err(LayoutError::WrongRowCount {
            expected: size as usize,
            actual: rows.len(),
        });
    }

    let mut board = Board::new(size, size);
    for (row, line) in rows.iter().enumerate() {
        let cells = line.chars().count();
        if cells != size as usize {
            return Err(LayoutError::WrongRowLength {
                row,
                expected: size as usize,
                actual: cells,
            });
        }

        for (col, c) in line.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let stone = Stone::from_symbol(c).ok_or(LayoutError::InvalidCharacter(c))?;
            board.place(Position::new(row as u8, col as u8), stone);
        }
    }

    Ok(board)
}

/// Render a board in the layout notation.
#[must_use]
pub fn format_layout(board: &Board<Stone>) -> String {
    (0..board.rows())
        .map(|row| {
            (0..board.cols())
                .map(|col| {
                    board
                        .occupant(Position::new(row, col))
                        .map_or('.', |stone| stone.symbol())
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}
