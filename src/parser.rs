//! Context-free sentence parsing with phrase chunk extraction

pub mod chart;
pub mod grammar;
pub mod tree;

pub use chart::ChartParser;
pub use grammar::{Grammar, Production, Term};
pub use tree::{Tree, chunks, np_chunks};
