//! Test suite for the Tic-Tac-Toe search core
//! Validates game rules, search invariants, and optimal play guarantees

use rand::{Rng, SeedableRng, rngs::StdRng};
use trivium::game::{Board, Cell, Move, Outcome, Player, best_move, search, utility};

/// Play random legal moves from `board` until the game ends, returning
/// every intermediate state (the starting board included).
fn random_playout(board: Board, rng: &mut StdRng) -> Vec<Board> {
    let mut states = vec![board];
    let mut current = board;
    while !current.is_terminal() {
        let moves = current.legal_moves();
        let mv = moves[rng.random_range(0..moves.len())];
        current = current.apply(mv).expect("legal moves always apply");
        states.push(current);
    }
    states
}

mod turn_order {
    use super::*;

    #[test]
    fn turns_alternate_strictly_starting_with_x() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let states = random_playout(Board::new(), &mut rng);
            for (ply, state) in states.iter().enumerate() {
                let expected = if ply.is_multiple_of(2) {
                    Player::X
                } else {
                    Player::O
                };
                assert_eq!(
                    state.to_move(),
                    expected,
                    "wrong turn at ply {ply} of {}",
                    state.encode()
                );
            }
        }
    }
}

mod move_application {
    use super::*;

    #[test]
    fn moves_outside_legal_moves_always_fail() {
        let mut rng = StdRng::seed_from_u64(23);
        let states = random_playout(Board::new(), &mut rng);
        let board = states[states.len() / 2];

        let legal = board.legal_moves();
        for row in 0..4 {
            for col in 0..4 {
                let mv = Move::new(row, col);
                if !legal.contains(&mv) {
                    assert!(
                        board.apply(mv).is_err(),
                        "move {mv} should be rejected on {}",
                        board.encode()
                    );
                }
            }
        }
    }

    #[test]
    fn applying_a_move_leaves_the_input_board_unchanged() {
        let board = Board::new();
        let encoded = board.encode();
        let _ = board.apply(Move::new(1, 1)).unwrap();
        assert_eq!(board.encode(), encoded);
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn empty_board() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn x_completes_the_top_row() {
        // X X .
        // O O .
        // . . .
        let board = Board::from_string("XX.OO....").unwrap();
        let mv = best_move(&board).unwrap();
        assert_eq!(mv, Move::new(0, 2));

        let done = board.apply(mv).unwrap();
        assert_eq!(done.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn completed_o_diagonal_is_terminal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[4] = Cell::O;
        cells[8] = Cell::O;
        let board = Board { cells };

        assert!(board.is_terminal());
        assert_eq!(utility(&board), -1);
        assert_eq!(board.outcome(), Outcome::Win(Player::O));
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert_eq!(utility(&board), 0);
        assert_eq!(board.outcome(), Outcome::Draw);
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn outcome_is_stable_across_repeated_evaluation() {
        let mut rng = StdRng::seed_from_u64(31);
        for state in random_playout(Board::new(), &mut rng) {
            assert_eq!(state.outcome(), state.outcome());
        }
    }
}

mod optimal_play {
    use super::*;

    #[test]
    fn best_move_is_none_exactly_on_terminal_boards() {
        let mut rng = StdRng::seed_from_u64(47);
        for state in random_playout(Board::new(), &mut rng) {
            if state.is_terminal() {
                assert_eq!(best_move(&state), None);
            } else {
                assert!(best_move(&state).is_some());
            }
        }
    }

    #[test]
    fn best_move_is_always_legal() {
        let mut rng = StdRng::seed_from_u64(59);
        for _ in 0..5 {
            // Skip the opening plies to keep the searches shallow
            let states = random_playout(Board::new(), &mut rng);
            for state in states.into_iter().skip(3) {
                if state.is_terminal() {
                    continue;
                }
                let mv = best_move(&state).unwrap();
                assert!(
                    state.legal_moves().contains(&mv),
                    "illegal best move {mv} on {}",
                    state.encode()
                );
            }
        }
    }

    #[test]
    fn optimal_play_from_the_start_is_a_draw() {
        let mut board = Board::new();
        while !board.is_terminal() {
            let mv = best_move(&board).expect("non-terminal boards have a best move");
            board = board.apply(mv).expect("best move is legal");
        }
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn search_value_matches_the_played_line() {
        // X to move wins the corner opening follow-up: value and move agree
        let board = Board::from_string("XX.OO....").unwrap();
        let result = search(&board);
        assert_eq!(result.value, 1);
        let next = board.apply(result.best_move.unwrap()).unwrap();
        assert_eq!(utility(&next), 1);
    }
}
