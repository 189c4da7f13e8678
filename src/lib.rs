//! Classic AI algorithms as one toolkit
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe implementation with exhaustive minimax search
//! - PageRank estimation by random-walk sampling and power iteration
//! - Context-free sentence parsing with noun phrase chunk extraction
//! - A CLI driver for all three

pub mod cli;
pub mod error;
pub mod export;
pub mod game;
pub mod pagerank;
pub mod parser;
pub mod utils;

pub use error::{Error, Result};
pub use game::{Board, Move, Outcome, Player, SearchResult};
pub use pagerank::{Corpus, PageRankConfig};
pub use parser::{ChartParser, Grammar, Tree};
