//! Error types for the trivium crate

use thiserror::Error;

/// Main error type for the trivium crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is out of range or already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("illegal move in game history at index {index}: {source}")]
    CorruptGameHistory {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("unknown page '{page}'")]
    UnknownPage { page: String },

    #[error("damping factor {value} must be strictly between 0 and 1")]
    InvalidDamping { value: f64 },

    #[error("sample count must be at least 1")]
    InvalidSampleCount,

    #[error("production for '{symbol}' has an empty right-hand side")]
    EmptyProduction { symbol: String },

    #[error("word '{word}' is not covered by the grammar's lexicon")]
    UnknownWord { word: String },

    #[error("cannot parse an empty sentence")]
    EmptySentence,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
