//! Undo, replay and forfeit tests across both games.

use boardgame_rules::core::{
    ForfeitReason, GameStatus, HistoryError, MoveError, MoveRequest, PlayerId, Position, WinReason,
};
use boardgame_rules::games::gomoku::GomokuEngine;
use boardgame_rules::games::xiangqi::{PieceKind, Side, XiangqiEngine};
use boardgame_rules::rules::RulesEngine;

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn red() -> PlayerId {
    Side::Red.into()
}

fn black() -> PlayerId {
    Side::Black.into()
}

// =============================================================================
// Undo
// =============================================================================

/// Undoing a capture puts the captured piece back.
#[test]
fn test_undo_restores_capture() {
    let engine = XiangqiEngine::standard();
    let start = engine.new_game().unwrap();

    let captured = engine
        .apply_move(&start, &MoveRequest::step(red(), pos(2, 1), pos(9, 1)))
        .unwrap();
    assert_eq!(captured.board().len(), 31);

    let restored = engine.undo(&captured).unwrap();
    assert_eq!(restored, start);
    assert_eq!(
        restored.board().occupant(pos(9, 1)).map(|p| (p.kind, p.side)),
        Some((PieceKind::Horse, Side::Black))
    );
    assert_eq!(restored.active_player(), red());
}

/// Undo on a fresh game fails.
#[test]
fn test_undo_empty_history() {
    let engine = GomokuEngine::standard();
    let state = engine.new_game().unwrap();

    assert_eq!(engine.undo(&state).unwrap_err(), HistoryError::NothingToUndo);
}

/// Undoing the winning stone reopens the game.
#[test]
fn test_undo_winning_move() {
    let engine = GomokuEngine::standard();
    let mut state = engine.new_game().unwrap();
    for col in 0..4 {
        for (player, row) in [(0, 0), (1, 5)] {
            let request = MoveRequest::place(PlayerId::new(player), pos(row, col));
            state = engine.apply_move(&state, &request).unwrap();
        }
    }
    let won = engine.apply_move(&state, &MoveRequest::place(PlayerId::new(0), pos(0, 4))).unwrap();
    assert!(won.is_terminal());

    let reopened = engine.undo(&won).unwrap();
    assert_eq!(reopened.status(), &GameStatus::Ongoing);
    assert_eq!(reopened, state);
}

/// A forfeit is not part of the move history, so undo drops it.
#[test]
fn test_undo_after_forfeit() {
    let engine = XiangqiEngine::standard();
    let state = engine.new_game().unwrap();
    let state = engine.apply_move(&state, &MoveRequest::step(red(), pos(0, 1), pos(2, 2))).unwrap();

    let resigned = engine.forfeit(&state, black(), ForfeitReason::Resignation).unwrap();
    assert_eq!(
        resigned.status(),
        &GameStatus::Won { winner: red(), reason: WinReason::Resignation }
    );
    assert_eq!(
        engine
            .apply_move(&resigned, &MoveRequest::step(black(), pos(6, 0), pos(5, 0)))
            .unwrap_err(),
        MoveError::GameAlreadyEnded
    );

    let undone = engine.undo(&resigned).unwrap();
    assert_eq!(undone.status(), &GameStatus::Ongoing);
    assert_eq!(undone.active_player(), red());
    assert!(undone.history().is_empty());
}

// =============================================================================
// Replay
// =============================================================================

/// Replaying a prefix matches the state at that point of the game.
#[test]
fn test_replay_prefixes() {
    let engine = XiangqiEngine::standard();
    let moves = [
        MoveRequest::step(red(), pos(2, 7), pos(2, 4)),
        MoveRequest::step(black(), pos(9, 7), pos(7, 6)),
        MoveRequest::step(red(), pos(0, 7), pos(2, 6)),
        MoveRequest::step(black(), pos(9, 8), pos(9, 7)),
        MoveRequest::step(red(), pos(2, 4), pos(6, 4)),
    ];

    let mut snapshots = vec![engine.new_game().unwrap()];
    for request in &moves {
        let next = engine.apply_move(snapshots.last().unwrap(), request).unwrap();
        snapshots.push(next);
    }
    let last = snapshots.last().unwrap();
    assert_eq!(last.last_move().unwrap().captured.map(|p| p.kind), Some(PieceKind::Soldier));

    for (n, expected) in snapshots.iter().enumerate() {
        assert_eq!(&engine.replay(last, n).unwrap(), expected, "prefix {n}");
    }
}

/// Asking for more moves than exist is an error.
#[test]
fn test_replay_out_of_range() {
    let engine = GomokuEngine::standard();
    let state = engine.new_game().unwrap();
    let request = MoveRequest::place(PlayerId::new(0), pos(7, 7));
    let state = engine.apply_move(&state, &request).unwrap();

    assert_eq!(
        engine.replay(&state, 2).unwrap_err(),
        HistoryError::OutOfRange { requested: 2, len: 1 }
    );
}

/// A history recorded under different rules does not replay.
#[test]
fn test_replay_under_stricter_rules_diverges() {
    use boardgame_rules::core::GameConfig;

    let relaxed = XiangqiEngine::new(GameConfig::xiangqi().with_flying_general(false)).unwrap();
    let (board, _) =
        boardgame_rules::games::xiangqi::parse_fen("4k4/9/9/9/9/9/9/9/4A4/4K4").unwrap();
    let state = relaxed.new_game_from(board, red()).unwrap();
    let state = relaxed
        .apply_move(&state, &MoveRequest::step(red(), pos(1, 4), pos(2, 3)))
        .unwrap();

    let strict = XiangqiEngine::standard();
    assert_eq!(
        strict.replay(&state, 1).unwrap_err(),
        HistoryError::Diverged { sequence: 0, source: MoveError::MoveLeavesGeneralInCheck }
    );
}
