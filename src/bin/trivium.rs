//! Trivium CLI - classic AI algorithms toolkit
//!
//! This CLI provides a unified interface for:
//! - Computing optimal Tic-Tac-Toe moves via exhaustive minimax
//! - Playing games between policies
//! - Estimating PageRank over a link corpus
//! - Parsing sentences and extracting noun phrase chunks

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trivium")]
#[command(version, about = "Classic AI algorithms toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute optimal moves for a board position
    Solve(trivium::cli::commands::solve::SolveArgs),

    /// Play games between two policies
    Selfplay(trivium::cli::commands::selfplay::SelfplayArgs),

    /// Estimate PageRank for a link corpus
    Pagerank(trivium::cli::commands::pagerank::PageRankArgs),

    /// Parse a sentence and list its noun phrase chunks
    Parse(trivium::cli::commands::parse::ParseArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => trivium::cli::commands::solve::execute(args),
        Commands::Selfplay(args) => trivium::cli::commands::selfplay::execute(args),
        Commands::Pagerank(args) => trivium::cli::commands::pagerank::execute(args),
        Commands::Parse(args) => trivium::cli::commands::parse::execute(args),
    }
}
