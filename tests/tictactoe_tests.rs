//! Tic-tac-toe integration tests.

use rust_alphabeta::core::{Action, PlayerId, Value};
use rust_alphabeta::games::tictactoe::{Board, LineHeuristic, TicTacToe, TicTacToeEncoder};
use rust_alphabeta::nn::{Evaluator, NetworkEvaluator, ZeroValue};
use rust_alphabeta::rules::{GameResult, RulesEngine};
use rust_alphabeta::search::{AlphaBeta, SearchConfig};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn choose<V: Evaluator<Board>>(evaluator: V, depth: u32, pruning: bool, position: &Board) -> Option<Action> {
    let config = SearchConfig::default()
        .with_max_depth(depth)
        .with_pruning(pruning);
    let mut search = AlphaBeta::new(TicTacToe::new(3), evaluator, config).unwrap();
    search.choose_action(position)
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_completes_row_at_every_depth() {
    // X to move: cell 5 completes the middle row.
    let position = board(".../XX./OO.");

    for depth in 1..=6 {
        for pruning in [true, false] {
            assert_eq!(
                choose(LineHeuristic::new(3), depth, pruning, &position),
                Some(Action::new(5)),
                "heuristic, depth {depth}, pruning {pruning}"
            );

            for constant in [0.99, -0.99, 0.0] {
                let evaluator = move |_: &Board| -> Value { constant };
                assert_eq!(
                    choose(evaluator, depth, pruning, &position),
                    Some(Action::new(5)),
                    "constant {constant}, depth {depth}, pruning {pruning}"
                );
            }
        }
    }
}

#[test]
fn test_completes_row_with_network_evaluator() {
    let position = board(".../XX./OO.");
    let evaluator: NetworkEvaluator<Board, _, _> =
        NetworkEvaluator::new(TicTacToeEncoder::new(3), ZeroValue::new(9));

    assert_eq!(choose(evaluator, 4, true, &position), Some(Action::new(5)));
}

#[test]
fn test_blocks_open_row() {
    // O threatens the top row; X has no win of its own.
    let position = board("OO./.X./...");

    for depth in 2..=6 {
        assert_eq!(
            choose(LineHeuristic::new(3), depth, true, &position),
            Some(Action::new(2)),
            "depth {depth}"
        );
    }
}

#[test]
fn test_winning_move_value_is_exact() {
    let position = board(".../XX./OO.");
    let config = SearchConfig::default().with_max_depth(3);
    let mut search = AlphaBeta::new(TicTacToe::new(3), LineHeuristic::new(3), config).unwrap();

    let values = search.analyze(&position);
    assert_eq!(values.len(), 5);
    assert!(values.contains(&(Action::new(5), 1.0)));
    for &(_, value) in &values {
        assert!((-1.0..=1.0).contains(&value));
    }
}

#[test]
fn test_last_empty_cell_is_played_without_search() {
    let position = board("XOX/XOO/OX.");
    let evaluator = |_: &Board| -> Value { panic!("single move must not be searched") };

    assert_eq!(choose(evaluator, 5, true, &position), Some(Action::new(8)));
}

#[test]
fn test_full_board_has_no_action() {
    let position = board("XOX/XOO/OXX");
    assert_eq!(choose(LineHeuristic::new(3), 3, true, &position), None);
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_perfect_play_draws() {
    let engine = TicTacToe::new(3);
    let config = SearchConfig::default().with_max_depth(9);
    let mut search = AlphaBeta::new(TicTacToe::new(3), LineHeuristic::new(3), config).unwrap();

    let mut position = engine.initial_board();
    let mut player = PlayerId::CANONICAL;

    while engine.outcome(&position, PlayerId::CANONICAL).is_none() {
        let action = search
            .choose_action(&position.canonical(player))
            .expect("non-terminal board has a legal move");
        let (next, next_player) = engine.next_state(&position, player, action);
        position = next;
        player = next_player;
    }

    assert_eq!(
        engine.outcome(&position, PlayerId::CANONICAL),
        Some(GameResult::Draw)
    );
}

#[test]
fn test_deep_search_beats_shallow_search() {
    let engine = TicTacToe::new(3);
    let deep_config = SearchConfig::default().with_max_depth(9);
    let shallow_config = SearchConfig::default().with_max_depth(1);
    let mut deep = AlphaBeta::new(&engine, LineHeuristic::new(3), deep_config).unwrap();
    let mut shallow = AlphaBeta::new(&engine, LineHeuristic::new(3), shallow_config).unwrap();

    for deep_player in [PlayerId::CANONICAL, PlayerId::OPPONENT] {
        let mut position = engine.initial_board();
        let mut player = PlayerId::CANONICAL;

        while engine.outcome(&position, PlayerId::CANONICAL).is_none() {
            let canonical = position.canonical(player);
            let action = if player == deep_player {
                deep.choose_action(&canonical)
            } else {
                shallow.choose_action(&canonical)
            }
            .expect("non-terminal board has a legal move");
            let (next, next_player) = engine.next_state(&position, player, action);
            position = next;
            player = next_player;
        }

        assert_ne!(
            engine.outcome(&position, deep_player),
            Some(GameResult::Loss),
            "deep search lost as {deep_player}"
        );
    }
}

#[test]
fn test_larger_board_search() {
    let config = SearchConfig::default().with_max_depth(2);
    let mut search = AlphaBeta::new(TicTacToe::new(4), LineHeuristic::new(4), config).unwrap();

    // Three in a row on a 4x4 board still needs the fourth cell.
    let position = board("XXX./OOO./..../....");
    assert_eq!(search.choose_action(&position), Some(Action::new(3)));
}
