//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A (row, column) coordinate on the board, each in `[0, 2]`.
///
/// Coordinates outside the grid are representable; `Board::apply` rejects
/// them with `Error::InvalidMove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major cell index for an in-range move.
    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }

    fn in_range(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of evaluating a board: a win for either player, a draw, or a
/// game still in progress. Always derived from the cells, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Draw,
    Win(Player),
}

/// Complete board state.
///
/// The grid is stored row-major. This type implements `Copy` since it is
/// only 9 bytes; every transition produces a fresh value, so boards
/// examined earlier in a search remain valid for sibling comparisons.
///
/// Whose turn it is follows from the mark counts (X opens, so the counts
/// are equal exactly when X is to move) and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// The player who moves next, derived from the mark counts.
    ///
    /// X if the counts are equal (including the empty board), otherwise O.
    /// Defined for every board, terminal ones included.
    pub fn to_move(&self) -> Player {
        let count = self.count_pieces();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Get cell at a coordinate
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * 3 + col]
    }

    /// Check whether a coordinate is inside the grid and empty
    pub fn is_empty(&self, mv: Move) -> bool {
        mv.in_range() && self.cells[mv.index()] == Cell::Empty
    }

    /// Every coordinate whose cell is empty, in row-major order.
    ///
    /// The order is part of the contract: `search::best_move` breaks ties
    /// by keeping the first optimal move this enumeration produces.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::new(i / 3, i % 3))
            .collect()
    }

    /// Apply a move and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidMove` when the coordinate is out of range or
    /// the cell is already occupied. This indicates a caller defect; the
    /// move should have come from `legal_moves`.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, mv: Move) -> Result<Board, crate::Error> {
        if !self.is_empty(mv) {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.index()] = self.to_move().to_cell();
        Ok(next)
    }

    /// Get the winner if a winning line is complete
    pub fn winner(&self) -> Option<Player> {
        lines::winner(&self.cells)
    }

    /// Check if a player has three in a line
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// Evaluate the board: win, draw, or still in progress.
    ///
    /// Checks the 8 winning lines first; with no complete line the board
    /// is a draw when full, otherwise in progress. Well-formed boards have
    /// at most one winner, which is not re-validated here.
    pub fn outcome(&self) -> Outcome {
        if let Some(player) = self.winner() {
            return Outcome::Win(player);
        }
        if self.cells.contains(&Cell::Empty) {
            Outcome::InProgress
        } else {
            Outcome::Draw
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// Check that the board is reachable under the game rules: X leads O
    /// by 0 or 1 marks, at most one player has a winning line, and a
    /// winner's mark count matches them having moved last.
    pub fn is_wellformed(&self) -> bool {
        let count = self.count_pieces();
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        true
    }

    /// Create a board from a 9-character string representation.
    ///
    /// Whitespace is filtered out; `.` marks an empty cell. The piece
    /// counts must be consistent with X moving first.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 non-whitespace characters remain,
    /// any character is not a valid cell, or the piece counts are invalid.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let count = board.count_pieces();
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Compact string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.legal_moves().len(), 9);
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new();

        let next = board.apply(Move::new(1, 1)).unwrap();
        assert_eq!(next.cell(1, 1), Cell::X);
        assert_eq!(next.to_move(), Player::O);

        // Original board untouched
        assert_eq!(board.cell(1, 1), Cell::Empty);

        // Move on occupied cell
        let result = next.apply(Move::new(1, 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("(1, 1)"));
    }

    #[test]
    fn test_apply_out_of_range() {
        let board = Board::new();
        assert!(board.apply(Move::new(3, 0)).is_err());
        assert!(board.apply(Move::new(0, 3)).is_err());
        assert!(board.apply(Move::new(7, 7)).is_err());
    }

    #[test]
    fn test_turn_alternation() {
        let mut board = Board::new();
        assert_eq!(board.to_move(), Player::X);

        board = board.apply(Move::new(0, 0)).unwrap();
        assert_eq!(board.to_move(), Player::O);

        board = board.apply(Move::new(0, 1)).unwrap();
        assert_eq!(board.to_move(), Player::X);

        board = board.apply(Move::new(0, 2)).unwrap();
        assert_eq!(board.to_move(), Player::O);
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::new().apply(Move::new(0, 1)).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 2));
        assert_eq!(moves[7], Move::new(2, 2));
        assert!(!moves.contains(&Move::new(0, 1)));
    }

    #[test]
    fn test_win_detection_row() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_win_detection_column() {
        let board = Board::from_string("OX.OX.O.X").unwrap();
        assert_eq!(board.outcome(), Outcome::Win(Player::O));
    }

    #[test]
    fn test_win_detection_diagonal() {
        let board = Board::from_string("X.O.XO..X").unwrap();
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Outcome::Draw);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_outcome_stable() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.outcome(), board.outcome());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cell(0, 0), Cell::X);
        assert_eq!(board.cell(0, 1), Cell::O);
        assert_eq!(board.cell(0, 2), Cell::X);
        assert_eq!(board.to_move(), Player::O);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
        // O cannot lead X
        assert!(Board::from_string("OO.X.....").is_err());
    }

    #[test]
    fn test_encode_display_roundtrip() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
        assert_eq!(Board::from_string(&display).unwrap(), board);
    }

    #[test]
    fn test_wellformed() {
        assert!(Board::new().is_wellformed());
        assert!(Board::from_string("XXXOO....").unwrap().is_wellformed());

        // Both players winning is impossible
        let impossible = Board {
            cells: [
                Cell::X,
                Cell::X,
                Cell::X,
                Cell::O,
                Cell::O,
                Cell::O,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
            ],
        };
        assert!(!impossible.is_wellformed());

        // X wins, but equal counts mean O would have moved last
        let stale = Board {
            cells: [
                Cell::X,
                Cell::X,
                Cell::X,
                Cell::O,
                Cell::O,
                Cell::Empty,
                Cell::O,
                Cell::Empty,
                Cell::Empty,
            ],
        };
        assert!(!stale.is_wellformed());
    }
}
