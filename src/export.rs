//! Tabular and JSON export of analysis results

use std::{collections::HashMap, fs::File, path::Path};

use serde::Serialize;

use crate::Result;
use crate::game::{Move, SearchResult};

/// Write page ranks to a CSV file, sorted by page name
pub fn write_ranks_csv(path: &Path, ranks: &HashMap<String, f64>) -> Result<()> {
    let mut pages: Vec<&str> = ranks.keys().map(String::as_str).collect();
    pages.sort_unstable();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["page", "rank"])?;
    for page in pages {
        let rank = format!("{:.4}", ranks[page]);
        writer.write_record([page, rank.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Position analysis as written by `trivium solve --export`
#[derive(Debug, Serialize)]
pub struct PositionAnalysis {
    /// 9-character board notation
    pub board: String,
    /// Acting player ("X" or "O")
    pub to_move: String,
    /// The selected move and the position's minimax value
    pub result: SearchResult,
    /// Every legal move with its minimax value
    pub moves: Vec<EvaluatedMove>,
}

#[derive(Debug, Serialize)]
pub struct EvaluatedMove {
    pub mv: Move,
    pub value: i32,
}

/// Write a position analysis to a JSON file
pub fn write_analysis_json(path: &Path, analysis: &PositionAnalysis) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, analysis)?;
    Ok(())
}
