//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - How a move request is validated into a `Move`
//! - What status a position has (ongoing, check, won, drawn)
//! - Which destinations are legal from a cell
//!
//! Everything that is the same for every game (committing, undo, replay,
//! forced termination) is provided on top of those hooks.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::core::board::Board;
use crate::core::error::{HistoryError, LayoutError, MoveError};
use crate::core::history::{Move, MoveRequest};
use crate::core::config::GameConfig;
use crate::core::player::{Occupant, PlayerId};
use crate::core::position::Position;
use crate::core::state::{ForfeitReason, GameState, GameStatus, WinStatus};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate_move` must not mutate anything; it returns the fully resolved
///   `Move` (piece, capture, sequence number) that would be committed.
/// - `evaluate` is called on every freshly committed, undone or replayed
///   state and must be deterministic.
/// - Implementations never advance turns or touch history themselves.
pub trait RulesEngine {
    /// What sits in a board cell.
    type Piece: Occupant + Clone + PartialEq + std::fmt::Debug;

    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Starting board and first player, honouring any configured layout.
    fn initial_layout(&self) -> Result<(Board<Self::Piece>, PlayerId), LayoutError>;

    /// Refuse layouts this game cannot start from with `first_player` to move.
    fn check_layout(
        &self,
        board: &Board<Self::Piece>,
        first_player: PlayerId,
    ) -> Result<(), LayoutError>;

    /// Validate a request against the current state.
    ///
    /// On success, returns the move exactly as it would be recorded.
    fn validate_move(
        &self,
        state: &GameState<Self::Piece>,
        request: &MoveRequest,
    ) -> Result<Move<Self::Piece>, MoveError>;

    /// Compute the status of a state from its board and history.
    fn evaluate(&self, state: &GameState<Self::Piece>) -> GameStatus;

    /// Legal destinations for the piece at `from`.
    fn legal_moves(&self, state: &GameState<Self::Piece>, from: Position) -> FxHashSet<Position>;

    /// Every legal move request for the active player.
    fn legal_actions(&self, state: &GameState<Self::Piece>) -> Vec<MoveRequest>;

    // === Provided Methods ===

    /// Start a game from the configured layout.
    fn new_game(&self) -> Result<GameState<Self::Piece>, LayoutError> {
        let (board, first_player) = self.initial_layout()?;
        self.new_game_from(board, first_player)
    }

    /// Start a game from an explicit layout.
    fn new_game_from(
        &self,
        board: Board<Self::Piece>,
        first_player: PlayerId,
    ) -> Result<GameState<Self::Piece>, LayoutError> {
        if first_player.index() >= 2 {
            return Err(LayoutError::UnknownPlayer(first_player));
        }
        self.check_layout(&board, first_player)?;

        let mut state = GameState::new(board, first_player);
        let status = self.evaluate(&state);
        state.set_status(status);
        Ok(state)
    }

    /// Validate and apply a move, returning the next state.
    ///
    /// On rejection `state` is untouched and the error says why.
    fn apply_move(
        &self,
        state: &GameState<Self::Piece>,
        request: &MoveRequest,
    ) -> Result<GameState<Self::Piece>, MoveError> {
        let mv = self.validate_move(state, request).map_err(|err| {
            debug!(
                player = %request.player,
                from = ?request.from,
                to = %request.to,
                error = %err,
                "move rejected"
            );
            err
        })?;

        debug!(
            player = %mv.player,
            from = ?mv.from,
            to = %mv.to,
            sequence = mv.sequence,
            capture = mv.is_capture(),
            "move accepted"
        );

        let mut next = state.clone();
        next.commit(mv);
        let status = self.evaluate(&next);
        log_status(&status);
        next.set_status(status);
        Ok(next)
    }

    /// Take back the last move.
    ///
    /// Status is recomputed from the restored board, so a forfeit recorded
    /// after that move does not survive the undo.
    fn undo(&self, state: &GameState<Self::Piece>) -> Result<GameState<Self::Piece>, HistoryError> {
        let mut prev = state.clone();
        let mv = prev.rewind().ok_or(HistoryError::NothingToUndo)?;
        debug!(sequence = mv.sequence, player = %mv.player, "move undone");

        let status = self.evaluate(&prev);
        prev.set_status(status);
        Ok(prev)
    }

    /// Rebuild the state after the first `up_to` moves of `state`'s history.
    ///
    /// Each move is re-validated from the initial layout, so this also checks
    /// that the history is consistent.
    fn replay(
        &self,
        state: &GameState<Self::Piece>,
        up_to: usize,
    ) -> Result<GameState<Self::Piece>, HistoryError> {
        let len = state.history().len();
        if up_to > len {
            return Err(HistoryError::OutOfRange {
                requested: up_to,
                len,
            });
        }

        let mut current = GameState::new(state.initial_board().clone(), state.first_player());
        let status = self.evaluate(&current);
        current.set_status(status);

        for recorded in state.history().iter().take(up_to) {
            let sequence = recorded.sequence;
            let next = self
                .apply_move(&current, &recorded.request())
                .map_err(|source| HistoryError::Diverged { sequence, source })?;

            if next.last_move() != Some(recorded) {
                return Err(HistoryError::Mismatch { sequence });
            }
            current = next;
        }

        Ok(current)
    }

    /// End the game against `loser` outside the move flow (timeouts, resignations).
    fn forfeit(
        &self,
        state: &GameState<Self::Piece>,
        loser: PlayerId,
        reason: ForfeitReason,
    ) -> Result<GameState<Self::Piece>, MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameAlreadyEnded);
        }
        if loser.index() >= 2 {
            return Err(MoveError::UnknownPlayer(loser));
        }

        let mut next = state.clone();
        let status = GameStatus::Won {
            winner: loser.opponent(),
            reason: reason.into(),
        };
        log_status(&status);
        next.set_status(status);
        Ok(next)
    }

    /// Win summary of a state.
    fn win_status(&self, state: &GameState<Self::Piece>) -> WinStatus {
        state.status().win_status()
    }
}

fn log_status(status: &GameStatus) {
    match status {
        GameStatus::Ongoing => {}
        GameStatus::Check { player } => info!(player = %player, "check"),
        GameStatus::Won { winner, reason } => info!(winner = %winner, ?reason, "game won"),
        GameStatus::Draw { reason } => info!(?reason, "game drawn"),
    }
}

/// Shared turn/terminal guard used by both engines.
///
/// Terminal is checked first so a finished game always answers
/// `GameAlreadyEnded`, whoever asks.
pub(crate) fn check_turn<P: Clone>(
    state: &GameState<P>,
    player: PlayerId,
) -> Result<(), MoveError> {
    if state.is_terminal() {
        return Err(MoveError::GameAlreadyEnded);
    }
    if !state.turns().is_active_player(player) {
        return Err(MoveError::WrongTurn {
            expected: state.active_player(),
            actual: player,
        });
    }
    Ok(())
}
