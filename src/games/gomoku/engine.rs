//! Gomoku rules engine.

use rustc_hash::FxHashSet;

use crate::core::{
    Board, DrawReason, GameConfig, GameKind, GameState, GameStatus, LayoutError, Move,
    MoveError, MoveRequest, PlayerId, Position, WinReason,
};
use crate::rules::{check_turn, RulesEngine};

use super::layout::parse_layout;
use super::line::{find_winning_line, WIN_LENGTH};
use super::Stone;

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: u8 = 15;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: u8 = 25;

/// Gomoku rules: alternate placements, first to five in a row wins.
#[derive(Clone, Debug)]
pub struct GomokuEngine {
    config: GameConfig,
    size: u8,
}

impl GomokuEngine {
    /// Create an engine for a Gomoku configuration.
    pub fn new(config: GameConfig) -> Result<Self, LayoutError> {
        if config.kind != GameKind::Gomoku {
            return Err(LayoutError::WrongGameKind {
                expected: GameKind::Gomoku.name(),
                actual: config.kind.name(),
            });
        }

        let size = config.board_size.unwrap_or(DEFAULT_BOARD_SIZE);
        if !(WIN_LENGTH as u8..=MAX_BOARD_SIZE).contains(&size) {
            return Err(LayoutError::UnsupportedBoardSize(size));
        }

        Ok(Self { config, size })
    }

    /// Standard 15x15 engine.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            config: GameConfig::gomoku(),
            size: DEFAULT_BOARD_SIZE,
        }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Empty board of this engine's size.
    #[must_use]
    pub fn empty_board(&self) -> Board<Stone> {
        Board::new(self.size, self.size)
    }
}

impl RulesEngine for GomokuEngine {
    type Piece = Stone;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initial_layout(&self) -> Result<(Board<Stone>, PlayerId), LayoutError> {
        let board = match &self.config.layout {
            Some(text) => parse_layout(text, self.size)?,
            None => self.empty_board(),
        };
        let first = self.config.first_player.unwrap_or(PlayerId::from(Stone::Black));
        Ok((board, first))
    }

    fn check_layout(
        &self,
        board: &Board<Stone>,
        _first_player: PlayerId,
    ) -> Result<(), LayoutError> {
        if board.rows() != self.size {
            return Err(LayoutError::WrongRowCount {
                expected: self.size as usize,
                actual: board.rows() as usize,
            });
        }
        if board.cols() != self.size {
            return Err(LayoutError::WrongRowLength {
                row: 0,
                expected: self.size as usize,
                actual: board.cols() as usize,
            });
        }
        // Only the last move is scanned during play, so a decided layout would go unnoticed.
        if let Some(line) = board.iter().find_map(|(pos, _)| find_winning_line(board, pos)) {
            return Err(LayoutError::AlreadyWon(line.player));
        }
        Ok(())
    }

    fn validate_move(
        &self,
        state: &GameState<Stone>,
        request: &MoveRequest,
    ) -> Result<Move<Stone>, MoveError> {
        check_turn(state, request.player)?;

        let to = request.to;
        if !state.board().is_within_bounds(to) {
            return Err(MoveError::OutOfBounds(to));
        }
        if !state.board().is_empty_at(to) {
            return Err(MoveError::CellOccupied(to));
        }
        // Stones never move once placed.
        if request.from.is_some() {
            return Err(MoveError::IllegalPieceMovement);
        }

        Ok(Move {
            player: request.player,
            from: None,
            to,
            piece: Stone::for_player(request.player),
            captured: None,
            sequence: state.history().next_sequence(),
        })
    }

    fn evaluate(&self, state: &GameState<Stone>) -> GameStatus {
        if let Some(mv) = state.last_move() {
            if let Some(line) = find_winning_line(state.board(), mv.to) {
                return GameStatus::Won {
                    winner: line.player,
                    reason: WinReason::FiveInRow(line),
                };
            }
        }

        if state.board().is_full() {
            GameStatus::Draw {
                reason: DrawReason::BoardFull,
            }
        } else {
            GameStatus::Ongoing
        }
    }

    /// Stones never move, so no cell has destinations.
    fn legal_moves(&self, _state: &GameState<Stone>, _from: Position) -> FxHashSet<Position> {
        FxHashSet::default()
    }

    fn legal_actions(&self, state: &GameState<Stone>) -> Vec<MoveRequest> {
        if state.is_terminal() {
            return Vec::new();
        }

        let player = state.active_player();
        state
            .board()
            .positions()
            .filter(|pos| state.board().is_empty_at(*pos))
            .map(|pos| MoveRequest::place(player, pos))
            .collect()
    }
}
