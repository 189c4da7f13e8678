//! Exhaustive minimax search
//!
//! A pair of mutually recursive value functions walks the full game tree
//! below a position, with no pruning beyond terminal detection and no
//! memoization. Depth is bounded by the 9 cells, so the recursion always
//! terminates without external intervention.

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Outcome, Player};

/// Numeric score of a board from X's perspective: +1 if X has won,
/// -1 if O has won, 0 otherwise (draw or, by convention, in progress).
///
/// Only meaningful on terminal boards; the search calls it after
/// confirming `is_terminal`.
pub fn utility(board: &Board) -> i32 {
    match board.outcome() {
        Outcome::Win(Player::X) => 1,
        Outcome::Win(Player::O) => -1,
        Outcome::Draw | Outcome::InProgress => 0,
    }
}

/// Greatest utility the maximizing player (X) can force from `board`,
/// assuming it is X's turn.
pub fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return utility(board);
    }

    let mut value = i32::MIN;
    for mv in board.legal_moves() {
        if let Ok(next) = board.apply(mv) {
            value = value.max(min_value(&next));
        }
    }
    value
}

/// Least utility the minimizing player (O) can force from `board`,
/// assuming it is O's turn.
pub fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return utility(board);
    }

    let mut value = i32::MAX;
    for mv in board.legal_moves() {
        if let Ok(next) = board.apply(mv) {
            value = value.min(max_value(&next));
        }
    }
    value
}

/// A search verdict: the selected move (`None` on terminal boards) and
/// the position's value under optimal play by both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub value: i32,
}

/// Compute the optimal move and position value for the acting player.
///
/// Terminal boards yield no move and their own utility. Otherwise each
/// candidate is scored by the opponent's best reply; the first move in
/// row-major order that strictly improves the incumbent score is kept,
/// so ties go to the earliest optimal move.
pub fn search(board: &Board) -> SearchResult {
    if board.is_terminal() {
        return SearchResult {
            best_move: None,
            value: utility(board),
        };
    }

    let maximizing = board.to_move() == Player::X;
    let mut best_move = None;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

    for mv in board.legal_moves() {
        if let Ok(next) = board.apply(mv) {
            let value = if maximizing {
                min_value(&next)
            } else {
                max_value(&next)
            };
            if (maximizing && value > best_value) || (!maximizing && value < best_value) {
                best_value = value;
                best_move = Some(mv);
            }
        }
    }

    SearchResult {
        best_move,
        value: best_value,
    }
}

/// The game-theoretically optimal move, or `None` on a terminal board.
pub fn best_move(board: &Board) -> Option<Move> {
    search(board).best_move
}

/// Evaluate every legal move in the given position and return its
/// minimax value. Analysis surface for drivers; the values are from X's
/// perspective regardless of who is acting.
pub fn evaluate_moves(board: &Board) -> Vec<(Move, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }

    let maximizing = board.to_move() == Player::X;
    let mut moves_with_values = Vec::new();
    for mv in board.legal_moves() {
        if let Ok(next) = board.apply(mv) {
            let value = if maximizing {
                min_value(&next)
            } else {
                max_value(&next)
            };
            moves_with_values.push((mv, value));
        }
    }
    moves_with_values
}
