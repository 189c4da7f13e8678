//! Pagerank command - estimate PageRank for a link corpus

use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    cli::output,
    export::write_ranks_csv,
    pagerank::{Corpus, PageRankConfig, iterate_pagerank, rank, sample_pagerank},
};

#[derive(Parser, Debug)]
#[command(about = "Estimate PageRank for a link corpus")]
pub struct PageRankArgs {
    /// JSON file mapping each page to its list of outbound links
    pub corpus: PathBuf,

    /// Damping factor
    #[arg(long, default_value_t = rank::DAMPING)]
    pub damping: f64,

    /// Number of random-walk samples
    #[arg(long, default_value_t = rank::SAMPLES)]
    pub samples: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the iterated ranks to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: PageRankArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.corpus)
        .with_context(|| format!("failed to read corpus file {}", args.corpus.display()))?;
    let raw: HashMap<String, Vec<String>> =
        serde_json::from_str(&contents).context("corpus file is not a JSON link map")?;
    let corpus = Corpus::from_links(raw);

    println!(
        "Loaded corpus with {} pages from {}",
        corpus.len(),
        args.corpus.display()
    );

    let config = PageRankConfig {
        damping: args.damping,
        samples: args.samples,
    };
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));

    let spinner = output::create_spinner("Sampling random walk...");
    let sampled = sample_pagerank(&corpus, &config, &mut rng)?;
    spinner.finish_and_clear();

    output::print_section(&format!(
        "PageRank results from sampling (n = {})",
        output::format_number(args.samples)
    ));
    print_ranks(&sampled);

    let iterated = iterate_pagerank(&corpus, args.damping)?;
    output::print_section("PageRank results from iteration");
    print_ranks(&iterated);

    if let Some(path) = &args.export {
        write_ranks_csv(path, &iterated)?;
        println!("\nIterated ranks exported to: {}", path.display());
    }

    Ok(())
}

fn print_ranks(ranks: &HashMap<String, f64>) {
    let mut pages: Vec<&str> = ranks.keys().map(String::as_str).collect();
    pages.sort_unstable();
    for page in pages {
        println!("  {page}: {:.4}", ranks[page]);
    }
}
