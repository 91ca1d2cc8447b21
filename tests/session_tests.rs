//! Driving games through `Match` with JSON configuration.

use boardgame_rules::core::{
    GameConfig, GameKind, GameStatus, LayoutError, MoveError, MoveRequest, PlayerId, Position,
    StalemateRule, WinStatus,
};
use boardgame_rules::session::{new_game, Match};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// A host can describe a game entirely in JSON.
#[test]
fn test_config_from_json() {
    let json = r#"{
        "kind": "xiangqi",
        "board_size": null,
        "layout": "3k5/9/9/9/9/9/9/9/9/R3K4 w",
        "first_player": null,
        "flying_general": true,
        "stalemate": "draw"
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.kind, GameKind::Xiangqi);
    assert_eq!(config.stalemate, StalemateRule::Draw);

    let game = new_game(&config).unwrap();
    let game = game
        .apply_move(&MoveRequest::step(PlayerId::new(0), pos(0, 0), pos(9, 0)))
        .unwrap();

    assert_eq!(game.status(), &GameStatus::Check { player: PlayerId::new(1) });
    let check = game.check_status();
    assert!(check.in_check);
    assert_eq!(check.checked_by[0].0, pos(9, 0));
}

/// Missing optional fields take their defaults.
#[test]
fn test_minimal_json_config() {
    let config: GameConfig = serde_json::from_str(r#"{"kind": "gomoku"}"#).unwrap();
    assert_eq!(config, GameConfig::gomoku());

    let game = new_game(&config).unwrap();
    assert!(matches!(game, Match::Gomoku { .. }));
    assert_eq!(game.active_player(), PlayerId::new(0));
    assert_eq!(game.win_status(), WinStatus::InProgress);
}

/// Configuration errors surface from `new_game`.
#[test]
fn test_invalid_layouts() {
    let config = GameConfig::gomoku().with_board_size(5).with_layout("xxxxx/...../.....");
    assert_eq!(
        new_game(&config).unwrap_err(),
        LayoutError::WrongRowCount { expected: 5, actual: 3 }
    );

    let config = GameConfig::xiangqi().with_layout("4k4/9/9/9/9/9/9/9/9/4K4 q");
    assert_eq!(
        new_game(&config).unwrap_err(),
        LayoutError::InvalidSideToMove("q".to_string())
    );
}

/// A short Gomoku game played through the facade.
#[test]
fn test_gomoku_through_match() {
    let mut game = new_game(&GameConfig::gomoku()).unwrap();
    for col in 0..4 {
        game = game.apply_move(&MoveRequest::place(PlayerId::new(0), pos(3, col))).unwrap();
        game = game.apply_move(&MoveRequest::place(PlayerId::new(1), pos(4, col))).unwrap();
    }
    game = game.apply_move(&MoveRequest::place(PlayerId::new(0), pos(3, 4))).unwrap();

    assert!(game.is_terminal());
    assert!(matches!(game.win_status(), WinStatus::Win { line: Some(_), .. }));
    assert_eq!(
        game.apply_move(&MoveRequest::place(PlayerId::new(1), pos(4, 4))).unwrap_err(),
        MoveError::GameAlreadyEnded
    );
    assert_eq!(game.replay(9).unwrap().move_count(), 9);
    assert!(!game.undo().unwrap().is_terminal());
}
