//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Outcome, Player};

/// A move as it was played, with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<PlayedMove>,
    pub outcome: Outcome,
}

impl Game {
    /// Create a new game from the empty starting position
    pub fn new() -> Self {
        Self::from_position(Board::new())
    }

    /// Create a new game from an arbitrary starting position
    pub fn from_position(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: initial.outcome(),
        }
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns `Error::GameOver` once the game has ended, or
    /// `Error::InvalidMove` for an illegal coordinate.
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome != Outcome::InProgress {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.apply(mv)?;

        self.moves.push(PlayedMove {
            mv,
            player: current.to_move(),
        });
        self.outcome = next.outcome();

        Ok(())
    }

    /// Replay moves up to a given index (exclusive).
    ///
    /// # Errors
    ///
    /// Returns an error if any move in the history is invalid for the
    /// state it was recorded against. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut state = self.initial;
        for (i, m) in self.moves.iter().take(end_index).enumerate() {
            state = state
                .apply(m.mv)
                .map_err(|e| crate::Error::CorruptGameHistory {
                    index: i,
                    source: Box::new(e),
                })?;
        }
        Ok(state)
    }

    /// Get current board state
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, from the initial position to the
    /// current one.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(self.initial);

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }

    /// Whether the game has ended
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
