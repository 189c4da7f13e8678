//! Move-selection policies for game drivers

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use super::{
    board::{Board, Move},
    search,
};
use crate::Result;

/// A strategy that picks a move in a non-terminal position
pub trait Policy {
    /// Select a move to play in the given position
    ///
    /// # Errors
    ///
    /// Returns `Error::NoValidMoves` when the position is terminal.
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Human-readable policy name
    fn name(&self) -> &str;
}

/// Plays the game-theoretically optimal move via exhaustive minimax
pub struct OptimalPolicy {
    name: String,
}

impl OptimalPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Policy for OptimalPolicy {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        search::best_move(board).ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays uniformly at random (baseline)
pub struct RandomPolicy {
    name: String,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random policy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        if board.is_terminal() {
            return Err(crate::Error::NoValidMoves);
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}
