//! Per-piece movement rules and attack detection.
//!
//! `check_movement` is the single source of truth for how pieces move. Move
//! validation, destination generation and attack detection all go through it,
//! so a piece attacks exactly the squares it could capture on.

use smallvec::SmallVec;

use crate::core::{Board, MoveError, Position};

use super::piece::{Piece, PieceKind, Side};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ELEPHANT: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];
const HORSE: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// Cells strictly between two points on the same rank or file.
///
/// Returns nothing for points that are not aligned.
fn between(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let (dr, dc) = from.delta_to(to);
    let aligned = (dr == 0) != (dc == 0);
    let steps = if aligned { dr.abs().max(dc.abs()) as usize - 1 } else { 0 };
    let (sr, sc) = (dr.signum() as i8, dc.signum() as i8);

    std::iter::successors(from.offset(sr, sc), move |pos| pos.offset(sr, sc)).take(steps)
}

/// Number of pieces strictly between two aligned points.
#[must_use]
pub fn pieces_between(board: &Board<Piece>, from: Position, to: Position) -> usize {
    between(from, to)
        .filter(|pos| !board.is_empty_at(*pos))
        .count()
}

/// Check the movement rule of `piece` standing on `from` for a move to `to`.
///
/// Assumes `to` is on the board and does not hold one of `piece`'s own side;
/// those are checked by the caller. Does not consider check.
pub fn check_movement(
    board: &Board<Piece>,
    piece: Piece,
    from: Position,
    to: Position,
) -> Result<(), MoveError> {
    let (dr, dc) = from.delta_to(to);
    if (dr, dc) == (0, 0) {
        return Err(MoveError::IllegalPieceMovement);
    }
    let (adr, adc) = (dr.abs(), dc.abs());

    match piece.kind {
        PieceKind::General => {
            if adr + adc == 1 && piece.side.palace_contains(to) {
                Ok(())
            } else {
                Err(MoveError::IllegalPieceMovement)
            }
        }
        PieceKind::Advisor => {
            if adr == 1 && adc == 1 && piece.side.palace_contains(to) {
                Ok(())
            } else {
                Err(MoveError::IllegalPieceMovement)
            }
        }
        PieceKind::Elephant => {
            if adr != 2 || adc != 2 || !piece.side.owns_row(to.row) {
                return Err(MoveError::IllegalPieceMovement);
            }
            let eye = from.offset((dr / 2) as i8, (dc / 2) as i8);
            if eye.is_some_and(|eye| !board.is_empty_at(eye)) {
                return Err(MoveError::PathBlocked);
            }
            Ok(())
        }
        PieceKind::Horse => {
            // The leg is the orthogonal neighbour toward the long axis.
            let leg = match (adr, adc) {
                (2, 1) => from.offset(dr.signum() as i8, 0),
                (1, 2) => from.offset(0, dc.signum() as i8),
                _ => return Err(MoveError::IllegalPieceMovement),
            };
            if leg.is_some_and(|leg| !board.is_empty_at(leg)) {
                return Err(MoveError::PathBlocked);
            }
            Ok(())
        }
        PieceKind::Chariot => {
            if dr != 0 && dc != 0 {
                return Err(MoveError::IllegalPieceMovement);
            }
            if pieces_between(board, from, to) > 0 {
                return Err(MoveError::PathBlocked);
            }
            Ok(())
        }
        PieceKind::Cannon => {
            if dr != 0 && dc != 0 {
                return Err(MoveError::IllegalPieceMovement);
            }
            let screens = pieces_between(board, from, to);
            match (board.is_empty_at(to), screens) {
                (true, 0) => Ok(()),
                (true, _) => Err(MoveError::PathBlocked),
                (false, 1) => Ok(()),
                (false, 0) => Err(MoveError::IllegalPieceMovement),
                (false, _) => Err(MoveError::PathBlocked),
            }
        }
        PieceKind::Soldier => {
            let forward = i16::from(piece.side.forward());
            let crossed = !piece.side.owns_row(from.row);
            if (dr == forward && dc == 0) || (crossed && dr == 0 && adc == 1) {
                Ok(())
            } else {
                Err(MoveError::IllegalPieceMovement)
            }
        }
    }
}

/// Cells a piece could possibly reach, before any rule is checked.
///
/// Every legal destination is in this list; most entries are then filtered
/// out by `check_movement`.
pub fn candidate_destinations(
    board: &Board<Piece>,
    piece: Piece,
    from: Position,
) -> SmallVec<[Position; 17]> {
    let soldier = [(piece.side.forward(), 0), (0, 1), (0, -1)];
    let offsets: &[(i8, i8)] = match piece.kind {
        PieceKind::General => &ORTHOGONAL,
        PieceKind::Advisor => &DIAGONAL,
        PieceKind::Elephant => &ELEPHANT,
        PieceKind::Horse => &HORSE,
        PieceKind::Soldier => &soldier,
        PieceKind::Chariot | PieceKind::Cannon => {
            let rank = (0..board.cols()).map(|col| Position::new(from.row, col));
            let file = (0..board.rows()).map(|row| Position::new(row, from.col));
            return rank.chain(file).filter(|pos| *pos != from).collect();
        }
    };

    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|pos| board.is_within_bounds(*pos))
        .collect()
}

/// Find a side's general.
#[must_use]
pub fn general_position(board: &Board<Piece>, side: Side) -> Option<Position> {
    board
        .iter()
        .find(|(_, piece)| piece.kind == PieceKind::General && piece.side == side)
        .map(|(pos, _)| pos)
}

/// Check if the general on `general` faces the other general on an open file.
fn faces_general(board: &Board<Piece>, attacker: Piece, from: Position, general: Position) -> bool {
    attacker.kind == PieceKind::General
        && from.col == general.col
        && board
            .occupant(general)
            .is_some_and(|target| {
                target.kind == PieceKind::General && target.is_enemy_of(&attacker)
            })
        && pieces_between(board, from, general) == 0
}

/// Pieces of side `by` that attack `target`.
///
/// With `flying_general`, a general also attacks the enemy general along an
/// open file.
pub fn attackers(
    board: &Board<Piece>,
    target: Position,
    by: Side,
    flying_general: bool,
) -> SmallVec<[(Position, Piece); 2]> {
    board
        .iter()
        .filter(|(_, piece)| piece.side == by)
        .filter(|&(from, piece)| {
            check_movement(board, *piece, from, target).is_ok()
                || (flying_general && faces_general(board, *piece, from, target))
        })
        .map(|(pos, piece)| (pos, *piece))
        .collect()
}

/// Check if `side`'s general is attacked. A side without a general never is.
#[must_use]
pub fn in_check(board: &Board<Piece>, side: Side, flying_general: bool) -> bool {
    general_position(board, side)
        .is_some_and(|general| {
            !attackers(board, general, side.opponent(), flying_general).is_empty()
        })
}
