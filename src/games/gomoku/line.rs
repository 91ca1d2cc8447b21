//! Five-in-a-row detection.
//!
//! Only the axes through the last placed stone can have changed, so the scan
//! is anchored there. Axes are tried in a fixed order (horizontal, vertical,
//! diagonal ↘, diagonal ↗) and the first qualifying axis wins, which keeps the
//! reported line deterministic when one stone completes several lines.

use smallvec::SmallVec;

use crate::core::{Board, Occupant, Position, WinningLine};

use super::Stone;

/// Stones needed in a row to win.
pub const WIN_LENGTH: usize = 5;

/// Positive direction of each axis, in scan priority order.
///
/// The negative direction is the negation: left, up, up-left, down-left.
pub const AXES: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Count stones equal to `stone` walking from `anchor` (exclusive).
fn run_length(board: &Board<Stone>, anchor: Position, stone: Stone, dr: i8, dc: i8) -> usize {
    std::iter::successors(anchor.offset(dr, dc), |pos| pos.offset(dr, dc))
        .take_while(|pos| board.occupant(*pos) == Some(&stone))
        .count()
}

/// Find the winning line through `anchor`, if the stone there completes one.
///
/// The line holds exactly `WIN_LENGTH` positions: the window that contains the
/// anchor and starts as far toward the negative end of the run as possible.
#[must_use]
pub fn find_winning_line(board: &Board<Stone>, anchor: Position) -> Option<WinningLine> {
    let stone = *board.occupant(anchor)?;

    for (dr, dc) in AXES {
        let back = run_length(board, anchor, stone, -dr, -dc);
        let forward = run_length(board, anchor, stone, dr, dc);
        if back + 1 + forward < WIN_LENGTH {
            continue;
        }

        let start = std::iter::successors(Some(anchor), |pos| pos.offset(-dr, -dc))
            .nth(back.min(WIN_LENGTH - 1))?;
        let positions: SmallVec<[Position; 5]> =
            std::iter::successors(Some(start), |pos| pos.offset(dr, dc))
                .take(WIN_LENGTH)
                .collect();

        return Some(WinningLine {
            positions,
            player: stone.owner(),
        });
    }

    None
}
