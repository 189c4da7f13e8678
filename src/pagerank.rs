//! PageRank estimation over a small hyperlink corpus

pub mod corpus;
pub mod rank;

pub use corpus::Corpus;
pub use rank::{
    DAMPING, PageRankConfig, SAMPLES, iterate_pagerank, sample_pagerank, transition_model,
};
