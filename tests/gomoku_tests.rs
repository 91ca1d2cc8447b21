//! Gomoku rule tests: placement validation, five-in-a-row detection and draws.
//!
//! Set `RUST_LOG=debug` to see accepted and rejected moves.

use boardgame_rules::core::{
    DrawReason, GameConfig, GameState, GameStatus, MoveError, MoveRequest, PlayerId, Position,
    WinReason, WinStatus,
};
use boardgame_rules::games::gomoku::{format_layout, GomokuEngine, Stone};
use boardgame_rules::rules::RulesEngine;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn black() -> PlayerId {
    Stone::Black.into()
}

fn white() -> PlayerId {
    Stone::White.into()
}

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// Play alternating placements starting from the active player.
fn play(
    engine: &GomokuEngine,
    mut state: GameState<Stone>,
    cells: &[(u8, u8)],
) -> GameState<Stone> {
    for &(row, col) in cells {
        let request = MoveRequest::place(state.active_player(), pos(row, col));
        state = engine.apply_move(&state, &request).unwrap();
    }
    state
}

// =============================================================================
// Winning lines
// =============================================================================

/// Four black stones on row 7; the fifth at (7, 9) wins with the whole run.
#[test]
fn test_horizontal_five_wins() {
    init_tracing();
    let engine = GomokuEngine::standard();
    let state = engine.new_game().unwrap();

    let state = play(
        &engine,
        state,
        &[(7, 5), (0, 0), (7, 6), (0, 2), (7, 7), (0, 4), (7, 8), (0, 6)],
    );
    assert_eq!(state.status(), &GameStatus::Ongoing);

    let state = play(&engine, state, &[(7, 9)]);

    let expected: Vec<Position> = (5..=9).map(|col| pos(7, col)).collect();
    match engine.win_status(&state) {
        WinStatus::Win { player, line: Some(line) } => {
            assert_eq!(player, black());
            assert_eq!(line.player, black());
            assert_eq!(line.positions.to_vec(), expected);
        }
        other => panic!("expected a five-in-a-row win, got {other:?}"),
    }
    assert!(matches!(
        state.status(),
        GameStatus::Won { reason: WinReason::FiveInRow(_), .. }
    ));
}

/// White can win too, on a diagonal.
#[test]
fn test_diagonal_five_for_white() {
    let engine = GomokuEngine::standard();
    let state = engine.new_game().unwrap();

    let state = play(
        &engine,
        state,
        &[
            (0, 0), (10, 4),
            (0, 2), (9, 5),
            (0, 4), (8, 6),
            (0, 6), (7, 7),
            (14, 14), (6, 8),
        ],
    );

    match state.status() {
        GameStatus::Won { winner, reason: WinReason::FiveInRow(line) } => {
            assert_eq!(*winner, white());
            // Ordered from the negative end of the up-right axis.
            assert_eq!(line.positions[0], pos(10, 4));
            assert_eq!(line.positions[4], pos(6, 8));
        }
        other => panic!("expected white to win, got {other:?}"),
    }
}

/// One stone completing two lines reports the horizontal one.
#[test]
fn test_double_line_prefers_horizontal() {
    let engine = GomokuEngine::standard();
    let mut board = engine.empty_board();
    for i in 3..7 {
        board.place(pos(7, i), Stone::Black);
        board.place(pos(i, 7), Stone::Black);
    }
    let state = engine.new_game_from(board, black()).unwrap();

    let state = play(&engine, state, &[(7, 7)]);

    match engine.win_status(&state) {
        WinStatus::Win { line: Some(line), .. } => {
            let expected: Vec<Position> = (3..=7).map(|col| pos(7, col)).collect();
            assert_eq!(line.positions.to_vec(), expected);
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

/// Overlines still win; the reported window holds exactly five stones.
#[test]
fn test_overline_reports_five() {
    let engine = GomokuEngine::standard();
    let mut board = engine.empty_board();
    for col in [0, 1, 3, 4, 5] {
        board.place(pos(2, col), Stone::Black);
    }
    let state = engine.new_game_from(board, black()).unwrap();

    let state = play(&engine, state, &[(2, 2)]);

    match engine.win_status(&state) {
        WinStatus::Win { line: Some(line), .. } => {
            assert_eq!(line.positions.len(), 5);
            assert!(line.positions.contains(&pos(2, 2)));
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

// =============================================================================
// Draws
// =============================================================================

/// Filling the last cell without a line draws.
#[test]
fn test_full_board_draw() {
    let config = GameConfig::gomoku()
        .with_board_size(5)
        .with_layout("xxoox/ooxxo/xxoox/ooxxo/xxoo.");
    let engine = GomokuEngine::new(config).unwrap();
    let state = engine.new_game().unwrap();
    assert_eq!(state.status(), &GameStatus::Ongoing);
    assert_eq!(engine.legal_actions(&state), vec![MoveRequest::place(black(), pos(4, 4))]);

    let state = play(&engine, state, &[(4, 4)]);

    assert_eq!(state.status(), &GameStatus::Draw { reason: DrawReason::BoardFull });
    assert_eq!(engine.win_status(&state), WinStatus::Draw);
    assert!(engine.legal_actions(&state).is_empty());
    assert_eq!(format_layout(state.board()), "xxoox/ooxxo/xxoox/ooxxo/xxoox");
}

// =============================================================================
// Rejections
// =============================================================================

/// Every rejection leaves the state as it was.
#[test]
fn test_rejected_moves_do_not_change_state() {
    init_tracing();
    let engine = GomokuEngine::standard();
    let state = play(&engine, engine.new_game().unwrap(), &[(7, 7)]);
    let before = state.clone();

    let cases = [
        (MoveRequest::place(white(), pos(15, 0)), MoveError::OutOfBounds(pos(15, 0))),
        (MoveRequest::place(white(), pos(7, 7)), MoveError::CellOccupied(pos(7, 7))),
        (
            MoveRequest::place(black(), pos(0, 0)),
            MoveError::WrongTurn { expected: white(), actual: black() },
        ),
        (MoveRequest::step(white(), pos(7, 7), pos(7, 8)), MoveError::IllegalPieceMovement),
    ];

    for (request, expected) in cases {
        assert_eq!(engine.apply_move(&state, &request).unwrap_err(), expected);
        assert_eq!(state, before);
    }
}

/// After a win nothing more can be played.
#[test]
fn test_no_moves_after_win() {
    let engine = GomokuEngine::standard();
    let state = play(
        &engine,
        engine.new_game().unwrap(),
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)],
    );
    assert!(state.is_terminal());

    assert_eq!(
        engine.apply_move(&state, &MoveRequest::place(white(), pos(5, 5))).unwrap_err(),
        MoveError::GameAlreadyEnded
    );
    assert_eq!(
        engine.apply_move(&state, &MoveRequest::place(black(), pos(5, 5))).unwrap_err(),
        MoveError::GameAlreadyEnded
    );
    assert!(engine.legal_actions(&state).is_empty());
}

/// Configured first player moves first.
#[test]
fn test_white_can_start() {
    let engine = GomokuEngine::new(GameConfig::gomoku().with_first_player(white())).unwrap();
    let state = engine.new_game().unwrap();

    assert_eq!(state.active_player(), white());
    let state = play(&engine, state, &[(7, 7)]);
    assert_eq!(state.board().occupant(pos(7, 7)), Some(&Stone::White));
    assert_eq!(state.active_player(), black());
}
