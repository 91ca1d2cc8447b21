//! Property tests over random legal games.
//!
//! Each case plays a sequence of moves chosen from `legal_actions` by the
//! generated indices, checking invariants after every move.

use proptest::prelude::*;

use boardgame_rules::core::{GameState, MoveRequest, Position};
use boardgame_rules::games::gomoku::{GomokuEngine, Stone};
use boardgame_rules::games::xiangqi::{in_check, Piece, Side, XiangqiEngine};
use boardgame_rules::rules::RulesEngine;

fn pick(actions: &[MoveRequest], choice: usize) -> Option<MoveRequest> {
    if actions.is_empty() {
        None
    } else {
        Some(actions[choice % actions.len()])
    }
}

fn random_xiangqi(engine: &XiangqiEngine, choices: &[usize]) -> Vec<GameState<Piece>> {
    let mut states = vec![engine.new_game().unwrap()];
    for &choice in choices {
        let current = states.last().unwrap();
        let Some(request) = pick(&engine.legal_actions(current), choice) else {
            break;
        };
        let next = engine.apply_move(current, &request).unwrap();
        states.push(next);
    }
    states
}

fn random_gomoku(engine: &GomokuEngine, choices: &[usize]) -> Vec<GameState<Stone>> {
    let mut states = vec![engine.new_game().unwrap()];
    for &choice in choices {
        let current = states.last().unwrap();
        let Some(request) = pick(&engine.legal_actions(current), choice) else {
            break;
        };
        let next = engine.apply_move(current, &request).unwrap();
        states.push(next);
    }
    states
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// No committed move leaves the mover's general attacked.
    #[test]
    fn prop_mover_never_left_in_check(choices in prop::collection::vec(any::<usize>(), 1..40)) {
        let engine = XiangqiEngine::standard();
        for state in random_xiangqi(&engine, &choices).iter().skip(1) {
            let mover = state.last_move().unwrap().player;
            prop_assert!(!in_check(state.board(), Side::for_player(mover), true));
        }
    }

    /// Apply followed by undo gives back the previous state.
    #[test]
    fn prop_undo_inverts_apply(choices in prop::collection::vec(any::<usize>(), 1..40)) {
        let engine = XiangqiEngine::standard();
        let states = random_xiangqi(&engine, &choices);
        for pair in states.windows(2) {
            prop_assert_eq!(&engine.undo(&pair[1]).unwrap(), &pair[0]);
        }
    }

    /// Replaying the full history reproduces the final state.
    #[test]
    fn prop_replay_reproduces_state(choices in prop::collection::vec(any::<usize>(), 0..40)) {
        let engine = XiangqiEngine::standard();
        let states = random_xiangqi(&engine, &choices);
        let last = states.last().unwrap();
        prop_assert_eq!(&engine.replay(last, last.history().len()).unwrap(), last);
    }

    /// Legal destinations never include the source or a friendly piece.
    #[test]
    fn prop_legal_moves_exclude_own_pieces(
        choices in prop::collection::vec(any::<usize>(), 0..20),
    ) {
        let engine = XiangqiEngine::standard();
        let states = random_xiangqi(&engine, &choices);
        let state = states.last().unwrap();
        let side = Side::for_player(state.active_player());

        for (from, _) in state.board().iter().filter(|(_, p)| p.side == side) {
            for to in engine.legal_moves(state, from) {
                prop_assert!(state.board().occupant(to).map_or(true, |p| p.side != side));
            }
        }
    }

    /// Gomoku: every stone on the board is recorded in history, and vice versa.
    #[test]
    fn prop_gomoku_history_matches_board(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        let engine = GomokuEngine::standard();
        let states = random_gomoku(&engine, &choices);
        let last = states.last().unwrap();

        prop_assert_eq!(last.board().len(), last.history().len());
        for mv in last.history().iter() {
            prop_assert_eq!(last.board().occupant(mv.to), Some(&mv.piece));
        }
        prop_assert_eq!(&engine.replay(last, last.history().len()).unwrap(), last);
    }

    /// Gomoku: apply followed by undo gives back the previous state.
    #[test]
    fn prop_gomoku_undo_inverts_apply(choices in prop::collection::vec(any::<usize>(), 1..60)) {
        let engine = GomokuEngine::standard();
        let states = random_gomoku(&engine, &choices);
        for pair in states.windows(2) {
            prop_assert_eq!(&engine.undo(&pair[1]).unwrap(), &pair[0]);
        }
    }

    /// Gomoku: a placement request on an occupied cell is always refused.
    #[test]
    fn prop_gomoku_occupied_rejected(
        choices in prop::collection::vec(any::<usize>(), 1..30),
        row in 0u8..15,
        col in 0u8..15,
    ) {
        let engine = GomokuEngine::standard();
        let states = random_gomoku(&engine, &choices);
        let state = states.last().unwrap();
        let target = Position::new(row, col);
        let request = MoveRequest::place(state.active_player(), target);

        if !state.is_terminal() && !state.board().is_empty_at(target) {
            prop_assert!(engine.apply_move(state, &request).is_err());
        }
    }
}
