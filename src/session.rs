//! A game-agnostic match handle.
//!
//! `Match` pairs an engine with its current state so a host can drive either
//! game from a single [`GameConfig`] without naming the piece type. Every
//! transition returns a new `Match`; the receiver is never modified.

use rustc_hash::FxHashSet;
use tracing::info;

use crate::core::{
    ForfeitReason, GameConfig, GameKind, GameState, GameStatus, HistoryError, LayoutError,
    MoveError, MoveRequest, PlayerId, Position, WinStatus,
};
use crate::games::gomoku::{GomokuEngine, Stone};
use crate::games::xiangqi::{CheckStatus, Piece, XiangqiEngine};
use crate::rules::RulesEngine;

/// An engine together with the state of one game.
#[derive(Clone, Debug)]
pub enum Match {
    Gomoku {
        engine: GomokuEngine,
        state: GameState<Stone>,
    },
    Xiangqi {
        engine: XiangqiEngine,
        state: GameState<Piece>,
    },
}

/// Start a game described by `config`.
pub fn new_game(config: &GameConfig) -> Result<Match, LayoutError> {
    let game = match config.kind {
        GameKind::Gomoku => {
            let engine = GomokuEngine::new(config.clone())?;
            let state = engine.new_game()?;
            Match::Gomoku { engine, state }
        }
        GameKind::Xiangqi => {
            let engine = XiangqiEngine::new(config.clone())?;
            let state = engine.new_game()?;
            Match::Xiangqi { engine, state }
        }
    };

    info!(kind = %config.kind, first = %game.active_player(), "new game");
    Ok(game)
}

impl Match {
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            Match::Gomoku { .. } => GameKind::Gomoku,
            Match::Xiangqi { .. } => GameKind::Xiangqi,
        }
    }

    #[must_use]
    pub fn status(&self) -> &GameStatus {
        match self {
            Match::Gomoku { state, .. } => state.status(),
            Match::Xiangqi { state, .. } => state.status(),
        }
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        match self {
            Match::Gomoku { state, .. } => state.active_player(),
            Match::Xiangqi { state, .. } => state.active_player(),
        }
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        match self {
            Match::Gomoku { state, .. } => state.history().len(),
            Match::Xiangqi { state, .. } => state.history().len(),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn apply_move(&self, request: &MoveRequest) -> Result<Match, MoveError> {
        Ok(match self {
            Match::Gomoku { engine, state } => Match::Gomoku {
                engine: engine.clone(),
                state: engine.apply_move(state, request)?,
            },
            Match::Xiangqi { engine, state } => Match::Xiangqi {
                engine: engine.clone(),
                state: engine.apply_move(state, request)?,
            },
        })
    }

    /// Legal destinations from `from`. Always empty for Gomoku.
    #[must_use]
    pub fn legal_moves(&self, from: Position) -> FxHashSet<Position> {
        match self {
            Match::Gomoku { engine, state } => engine.legal_moves(state, from),
            Match::Xiangqi { engine, state } => engine.legal_moves(state, from),
        }
    }

    /// Every legal request for the player to move.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<MoveRequest> {
        match self {
            Match::Gomoku { engine, state } => engine.legal_actions(state),
            Match::Xiangqi { engine, state } => engine.legal_actions(state),
        }
    }

    #[must_use]
    pub fn win_status(&self) -> WinStatus {
        match self {
            Match::Gomoku { engine, state } => engine.win_status(state),
            Match::Xiangqi { engine, state } => engine.win_status(state),
        }
    }

    /// Check status of the player to move. Gomoku has no check.
    #[must_use]
    pub fn check_status(&self) -> CheckStatus {
        match self {
            Match::Gomoku { .. } => CheckStatus::default(),
            Match::Xiangqi { engine, state } => engine.check_status(state),
        }
    }

    pub fn undo(&self) -> Result<Match, HistoryError> {
        Ok(match self {
            Match::Gomoku { engine, state } => Match::Gomoku {
                engine: engine.clone(),
                state: engine.undo(state)?,
            },
            Match::Xiangqi { engine, state } => Match::Xiangqi {
                engine: engine.clone(),
                state: engine.undo(state)?,
            },
        })
    }

    /// Rebuild the match after its first `up_to` moves.
    pub fn replay(&self, up_to: usize) -> Result<Match, HistoryError> {
        Ok(match self {
            Match::Gomoku { engine, state } => Match::Gomoku {
                engine: engine.clone(),
                state: engine.replay(state, up_to)?,
            },
            Match::Xiangqi { engine, state } => Match::Xiangqi {
                engine: engine.clone(),
                state: engine.replay(state, up_to)?,
            },
        })
    }

    pub fn forfeit(&self, loser: PlayerId, reason: ForfeitReason) -> Result<Match, MoveError> {
        Ok(match self {
            Match::Gomoku { engine, state } => Match::Gomoku {
                engine: engine.clone(),
                state: engine.forfeit(state, loser, reason)?,
            },
            Match::Xiangqi { engine, state } => Match::Xiangqi {
                engine: engine.clone(),
                state: engine.forfeit(state, loser, reason)?,
            },
        })
    }
}
