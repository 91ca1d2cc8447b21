//! Xiangqi rules engine.
//!
//! Validation runs in a fixed order: turn and terminal state, bounds, source
//! piece, destination, per-piece movement, and finally a scratch-board check
//! that the mover's general is not left attacked. Nothing is committed until
//! every step has passed.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{
    Board, DrawReason, GameConfig, GameKind, GameState, GameStatus, LayoutError, Move, MoveError,
    MoveRequest, PlayerId, Position, StalemateRule, WinReason,
};
use crate::rules::{check_turn, RulesEngine};

use super::fen::{parse_fen, standard_board};
use super::movement::{
    attackers, candidate_destinations, check_movement, general_position, in_check,
};
use super::piece::{Piece, PieceKind, Side, COLS, ROWS};

/// Whether a side's general is attacked, and by what.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStatus {
    pub in_check: bool,
    pub checked_by: SmallVec<[(Position, Piece); 2]>,
}

/// Xiangqi rules with configurable flying-general and stalemate variants.
#[derive(Clone, Debug)]
pub struct XiangqiEngine {
    config: GameConfig,
}

impl XiangqiEngine {
    /// Create an engine for a Xiangqi configuration.
    pub fn new(config: GameConfig) -> Result<Self, LayoutError> {
        if config.kind != GameKind::Xiangqi {
            return Err(LayoutError::WrongGameKind {
                expected: GameKind::Xiangqi.name(),
                actual: config.kind.name(),
            });
        }
        Ok(Self { config })
    }

    /// Engine with the default rule set.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            config: GameConfig::xiangqi(),
        }
    }

    fn flying_general(&self) -> bool {
        self.config.flying_general
    }

    /// Check if `side`'s general is attacked on `board`.
    #[must_use]
    pub fn is_in_check(&self, board: &Board<Piece>, side: Side) -> bool {
        in_check(board, side, self.flying_general())
    }

    /// Check status of the player to move.
    #[must_use]
    pub fn check_status(&self, state: &GameState<Piece>) -> CheckStatus {
        let side = Side::for_player(state.active_player());
        let board = state.board();
        let checked_by = general_position(board, side)
            .map(|general| attackers(board, general, side.opponent(), self.flying_general()))
            .unwrap_or_default();

        CheckStatus {
            in_check: !checked_by.is_empty(),
            checked_by,
        }
    }

    /// Check if playing `from -> to` would leave `side`'s general attacked.
    fn exposes_general(
        &self,
        board: &Board<Piece>,
        from: Position,
        to: Position,
        side: Side,
    ) -> bool {
        let mut scratch = board.clone();
        scratch.move_piece(from, to);
        self.is_in_check(&scratch, side)
    }

    /// Every rule except turn order: source, destination, movement, check safety.
    fn validate_piece_move(
        &self,
        board: &Board<Piece>,
        side: Side,
        from: Position,
        to: Position,
    ) -> Result<(Piece, Option<Piece>), MoveError> {
        let piece = board
            .occupant(from)
            .copied()
            .filter(|piece| piece.side == side)
            .ok_or(MoveError::NoPieceAtSource)?;

        let captured = board.occupant(to).copied();
        if captured.is_some_and(|target| target.side == side) {
            return Err(MoveError::CellOccupied(to));
        }

        check_movement(board, piece, from, to)?;

        if self.exposes_general(board, from, to, side) {
            return Err(MoveError::MoveLeavesGeneralInCheck);
        }

        Ok((piece, captured))
    }

    /// Legal destinations of the piece on `from` for `side`, ignoring turn order.
    fn destinations(
        &self,
        board: &Board<Piece>,
        side: Side,
        from: Position,
    ) -> FxHashSet<Position> {
        let Some(piece) = board.occupant(from).copied().filter(|piece| piece.side == side) else {
            return FxHashSet::default();
        };

        candidate_destinations(board, piece, from)
            .into_iter()
            .filter(|to| self.validate_piece_move(board, side, from, *to).is_ok())
            .collect()
    }

    /// Check if `side` has at least one legal move.
    fn has_legal_move(&self, board: &Board<Piece>, side: Side) -> bool {
        board
            .iter()
            .filter(|(_, piece)| piece.side == side)
            .any(|(from, piece)| {
                candidate_destinations(board, *piece, from)
                    .into_iter()
                    .any(|to| self.validate_piece_move(board, side, from, to).is_ok())
            })
    }
}

impl RulesEngine for XiangqiEngine {
    type Piece = Piece;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initial_layout(&self) -> Result<(Board<Piece>, PlayerId), LayoutError> {
        let (board, side_to_move) = match &self.config.layout {
            Some(fen) => parse_fen(fen)?,
            None => (standard_board(), None),
        };

        let first = side_to_move
            .map(PlayerId::from)
            .or(self.config.first_player)
            .unwrap_or(PlayerId::from(Side::Red));
        Ok((board, first))
    }

    fn check_layout(
        &self,
        board: &Board<Piece>,
        first_player: PlayerId,
    ) -> Result<(), LayoutError> {
        if board.rows() != ROWS {
            return Err(LayoutError::WrongRowCount {
                expected: ROWS as usize,
                actual: board.rows() as usize,
            });
        }
        if board.cols() != COLS {
            return Err(LayoutError::WrongRowLength {
                row: 0,
                expected: COLS as usize,
                actual: board.cols() as usize,
            });
        }

        for side in [Side::Red, Side::Black] {
            let generals: Vec<Position> = board
                .iter()
                .filter(|(_, piece)| piece.side == side && piece.kind == PieceKind::General)
                .map(|(pos, _)| pos)
                .collect();

            if generals.len() > 1 {
                return Err(LayoutError::GeneralCount {
                    side: side.into(),
                    count: generals.len(),
                });
            }
            if let Some(&pos) = generals.iter().find(|pos| !side.palace_contains(**pos)) {
                return Err(LayoutError::GeneralOutsidePalace(pos));
            }
        }

        // The side to move could otherwise capture the enemy general outright.
        let waiting = Side::for_player(first_player).opponent();
        if self.is_in_check(board, waiting) {
            return Err(LayoutError::OpponentInCheck(waiting.into()));
        }

        Ok(())
    }

    fn validate_move(
        &self,
        state: &GameState<Piece>,
        request: &MoveRequest,
    ) -> Result<Move<Piece>, MoveError> {
        check_turn(state, request.player)?;

        let board = state.board();
        for pos in request.from.iter().chain(std::iter::once(&request.to)) {
            if !board.is_within_bounds(*pos) {
                return Err(MoveError::OutOfBounds(*pos));
            }
        }
        let from = request.from.ok_or(MoveError::NoPieceAtSource)?;

        let side = Side::for_player(request.player);
        let (piece, captured) = self.validate_piece_move(board, side, from, request.to)?;

        Ok(Move {
            player: request.player,
            from: Some(from),
            to: request.to,
            piece,
            captured,
            sequence: state.history().next_sequence(),
        })
    }

    fn evaluate(&self, state: &GameState<Piece>) -> GameStatus {
        let player = state.active_player();
        let side = Side::for_player(player);
        let board = state.board();

        let checked = self.is_in_check(board, side);
        let can_move = self.has_legal_move(board, side);
        trace!(%side, checked, can_move, "evaluated position");

        match (checked, can_move) {
            (true, false) => GameStatus::Won {
                winner: player.opponent(),
                reason: WinReason::Checkmate,
            },
            (false, false) => match self.config.stalemate {
                StalemateRule::Loss => GameStatus::Won {
                    winner: player.opponent(),
                    reason: WinReason::Stalemate,
                },
                StalemateRule::Draw => GameStatus::Draw {
                    reason: DrawReason::Stalemate,
                },
            },
            (true, true) => GameStatus::Check { player },
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Destinations for the active player's piece on `from`.
    ///
    /// Empty for empty cells, opponent pieces and finished games.
    fn legal_moves(&self, state: &GameState<Piece>, from: Position) -> FxHashSet<Position> {
        if state.is_terminal() {
            return FxHashSet::default();
        }
        self.destinations(state.board(), Side::for_player(state.active_player()), from)
    }

    fn legal_actions(&self, state: &GameState<Piece>) -> Vec<MoveRequest> {
        if state.is_terminal() {
            return Vec::new();
        }

        let player = state.active_player();
        let side = Side::for_player(player);
        let board = state.board();

        let mut actions: Vec<MoveRequest> = board
            .iter()
            .filter(|(_, piece)| piece.side == side)
            .flat_map(|(from, _)| {
                self.destinations(board, side, from)
                    .into_iter()
                    .map(move |to| MoveRequest::step(player, from, to))
            })
            .collect();
        // Hash-set iteration order is arbitrary; keep enumeration deterministic.
        actions.sort_by_key(|request| (request.from, request.to));
        actions
    }
}
