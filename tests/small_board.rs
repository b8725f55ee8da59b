//! End-to-end play on 3x3 with three in a row, where full-depth search is
//! cheap enough to check against every human strategy.

use five_in_a_row::ai::{minimax, Agent, MinimaxAgent};
use five_in_a_row::game::parse::parse_board;
use five_in_a_row::game::{Board, GameOutcome, GameState, Player};

/// Walk every human reply; the machine answers with its search. Returns the
/// number of finished games and calls `check` on each outcome.
fn explore(state: &GameState, check: &dyn Fn(GameOutcome)) -> usize {
    if let Some(outcome) = state.outcome() {
        check(outcome);
        return 1;
    }
    match state.current_player() {
        Player::Machine => {
            let mut board = state.board().clone();
            let depth = board.empty_count();
            let result = minimax(&mut board, depth, Player::Machine);
            let mv = result.best_move().expect("machine has a move");
            explore(&state.apply_move(mv).unwrap(), check)
        }
        Player::Human => state
            .legal_moves()
            .into_iter()
            .map(|mv| explore(&state.apply_move(mv).unwrap(), check))
            .sum(),
    }
}

fn never_loses(outcome: GameOutcome) {
    assert_ne!(outcome, GameOutcome::Winner(Player::Human));
}

#[test]
fn machine_never_loses_moving_second() {
    let state = GameState::from_board(Board::with_rules(3, 3), Player::Human);
    let games = explore(&state, &never_loses);
    assert!(games > 0);
}

#[test]
fn machine_never_loses_moving_first() {
    // Searching the empty board directly, without the random opening.
    let state = GameState::from_board(Board::with_rules(3, 3), Player::Machine);
    let games = explore(&state, &never_loses);
    assert!(games > 0);
}

#[test]
fn machine_never_loses_after_any_random_opening() {
    for seed in 0..9 {
        let mut agent = MinimaxAgent::with_seed(None, seed);
        let state = GameState::from_board(Board::with_rules(3, 3), Player::Machine);
        let opening = agent.select_move(&state).unwrap();
        let state = state.apply_move(opening).unwrap();
        explore(&state, &never_loses);
    }
}

#[test]
fn corner_against_adjacent_edge_is_a_forced_win() {
    // Machine holds a corner, the human answered on an adjacent edge.
    let board = parse_board("1,-1,0\n0,0,0\n0,0,0\n", 3, 3).unwrap();

    let mut search_board = board.clone();
    let result = minimax(&mut search_board, 7, Player::Machine);
    assert_eq!(result.score, 1.0);
    assert_eq!(search_board, board);

    let state = GameState::from_board(board, Player::Machine);
    let games = explore(&state, &|outcome| {
        assert_eq!(outcome, GameOutcome::Winner(Player::Machine));
    });
    assert!(games > 1);
}

#[test]
fn optimal_play_from_empty_board_is_a_draw() {
    let mut board = Board::with_rules(3, 3);
    let result = minimax(&mut board, 9, Player::Machine);
    assert_eq!(result.score, 0.0);
    // every opening draws, so the first cell wins the tie
    assert_eq!((result.row, result.col), (0, 0));
}
