//! CLI infrastructure for the trivium toolkit
//!
//! This module provides the command-line interface for analyzing game
//! positions, running self-play matches, estimating PageRank, and
//! parsing sentences.

pub mod commands;
pub mod output;
