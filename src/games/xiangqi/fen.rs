//! FEN encoding and decoding for Xiangqi layouts.
//!
//! Ranks are listed from Black's back rank (row 9) down to Red's (row 0),
//! separated by `/`. Letters are `k a b n r c p`, uppercase for Red; digits
//! count consecutive empty cells. An optional second field gives the side to
//! move: `w` or `r` for Red, `b` for Black.
//!
//! Piece ids are assigned in row-major order from row 0, so the same layout
//! always yields the same ids.

use crate::core::{Board, LayoutError, Position};

use super::piece::{Piece, PieceId, PieceKind, Side, COLS, ROWS};

/// The standard opening position, Red to move.
pub const STANDARD_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w";

/// Parse a FEN string into a board and an optional side to move.
pub fn parse_fen(fen: &str) -> Result<(Board<Piece>, Option<Side>), LayoutError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap_or("");

    let side_to_move = match fields.next() {
        None => None,
        Some("w") | Some("r") => Some(Side::Red),
        Some("b") => Some(Side::Black),
        Some(other) => return Err(LayoutError::InvalidSideToMove(other.to_string())),
    };

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != ROWS as usize {
        return Err(LayoutError::WrongRowCount {
            expected: ROWS as usize,
            actual: ranks.len(),
        });
    }

    let mut cells = Vec::new();
    for (i, rank) in ranks.iter().enumerate() {
        let row = ROWS as usize - 1 - i;
        let mut col = 0usize;
        for c in rank.chars() {
            if let Some(empty) = c.to_digit(10) {
                col += empty as usize;
                continue;
            }
            let kind = PieceKind::from_fen_char(c).ok_or(LayoutError::InvalidCharacter(c))?;
            let side = if c.is_ascii_uppercase() { Side::Red } else { Side::Black };
            if col < COLS as usize {
                cells.push((Position::new(row as u8, col as u8), kind, side));
            }
            col += 1;
        }
        if col != COLS as usize {
            return Err(LayoutError::WrongRowLength {
                row,
                expected: COLS as usize,
                actual: col,
            });
        }
    }

    Ok((board_from_cells(cells), side_to_move))
}

/// Render a board as FEN, with a side-to-move field if one is given.
#[must_use]
pub fn to_fen(board: &Board<Piece>, side_to_move: Option<Side>) -> String {
    let ranks: Vec<String> = (0..board.rows())
        .rev()
        .map(|row| {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..board.cols() {
                match board.occupant(Position::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rank
        })
        .collect();

    let placement = ranks.join("/");
    match side_to_move {
        Some(Side::Red) => format!("{placement} w"),
        Some(Side::Black) => format!("{placement} b"),
        None => placement,
    }
}

/// The standard opening board (the placement part of `STANDARD_FEN`).
#[must_use]
pub fn standard_board() -> Board<Piece> {
    use PieceKind::*;

    const BACK_RANK: [PieceKind; 9] = [
        Chariot, Horse, Elephant, Advisor, General, Advisor, Elephant, Horse, Chariot,
    ];

    let mut cells = Vec::with_capacity(32);
    for side in [Side::Red, Side::Black] {
        // Rows counted from the side's own back rank.
        let row = |rank: u8| match side {
            Side::Red => rank,
            Side::Black => ROWS - 1 - rank,
        };
        for (col, kind) in BACK_RANK.iter().enumerate() {
            cells.push((Position::new(row(0), col as u8), *kind, side));
        }
        for col in [1, 7] {
            cells.push((Position::new(row(2), col), Cannon, side));
        }
        for col in [0, 2, 4, 6, 8] {
            cells.push((Position::new(row(3), col), Soldier, side));
        }
    }

    board_from_cells(cells)
}

/// Build a board, numbering pieces in row-major order.
fn board_from_cells(mut cells: Vec<(Position, PieceKind, Side)>) -> Board<Piece> {
    cells.sort_by_key(|(pos, _, _)| *pos);
    let mut board = Board::new(ROWS, COLS);
    for (i, (pos, kind, side)) in cells.into_iter().enumerate() {
        board.place(pos, Piece::new(kind, side, PieceId(i as u8)));
    }
    board
}
