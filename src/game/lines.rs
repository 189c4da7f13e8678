//! Winning line analysis

use super::board::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has won by having three in a line
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Find the winner, if any line is complete.
///
/// Well-formed boards have at most one winner, so scan order over the
/// lines does not matter.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    if has_won(cells, Player::X) {
        Some(Player::X)
    } else if has_won(cells, Player::O) {
        Some(Player::O)
    } else {
        None
    }
}
