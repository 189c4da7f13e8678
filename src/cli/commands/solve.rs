//! Solve command - optimal-move analysis for board positions

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    export::{EvaluatedMove, PositionAnalysis, write_analysis_json},
    game::{Board, Outcome, Player, SearchResult, evaluate_moves},
};

#[derive(Parser, Debug)]
#[command(about = "Compute optimal moves for a position")]
pub struct SolveArgs {
    /// Board to analyze as 9 cells in row-major order, e.g. "XO..X...."
    #[arg(long)]
    pub state: Option<String>,

    /// List every minimax-equivalent move instead of the selected one
    #[arg(long)]
    pub full: bool,

    /// Export the analysis to a JSON file
    #[arg(long)]
    pub export: Option<std::path::PathBuf>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    if let Some(s) = &args.state {
        let board = Board::from_string(s)?;
        output::print_section("Optimal move analysis");
        analyze_position(&board, "Custom position", args.full, args.export.as_deref())?;
        return Ok(());
    }

    if args.export.is_some() {
        return Err(anyhow::anyhow!("--export requires --state"));
    }

    output::print_section("Optimal move analysis for key openings");

    analyze_position(&Board::new(), "Empty board", args.full, None)?;
    analyze_position(
        &Board::from_string("....X....")?,
        "Center taken by X",
        args.full,
        None,
    )?;
    analyze_position(
        &Board::from_string("X........")?,
        "Corner taken by X",
        args.full,
        None,
    )?;

    Ok(())
}

fn analyze_position(
    board: &Board,
    description: &str,
    full: bool,
    export: Option<&Path>,
) -> Result<()> {
    println!("\n{description}:");
    println!("{board}");

    let evaluated = evaluate_moves(board);
    if evaluated.is_empty() {
        println!("  (position is terminal: {})", outcome_label(board.outcome()));
        return Ok(());
    }

    let maximizing = board.to_move() == Player::X;
    let best_value = evaluated
        .iter()
        .map(|&(_, value)| value)
        .reduce(|a, b| if maximizing { a.max(b) } else { a.min(b) })
        .unwrap_or(0);

    if full {
        println!("Optimal moves (all minimax-equivalent, value {best_value}):");
        for (mv, value) in &evaluated {
            if *value == best_value {
                println!("  - {mv}");
            }
        }
    } else {
        // evaluate_moves preserves row-major order, so the first optimal
        // entry is the move the search itself would pick
        if let Some((mv, _)) = evaluated.iter().find(|&&(_, value)| value == best_value) {
            println!("Optimal move: {mv} (value {best_value})");
        }
    }

    if let Some(path) = export {
        let analysis = PositionAnalysis {
            board: board.encode(),
            to_move: match board.to_move() {
                Player::X => "X".to_string(),
                Player::O => "O".to_string(),
            },
            result: SearchResult {
                best_move: evaluated
                    .iter()
                    .find(|&&(_, value)| value == best_value)
                    .map(|&(mv, _)| mv),
                value: best_value,
            },
            moves: evaluated
                .into_iter()
                .map(|(mv, value)| EvaluatedMove { mv, value })
                .collect(),
        };
        write_analysis_json(path, &analysis)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "in progress",
        Outcome::Draw => "draw",
        Outcome::Win(Player::X) => "X wins",
        Outcome::Win(Player::O) => "O wins",
    }
}
