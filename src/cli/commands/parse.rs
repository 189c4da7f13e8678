//! Parse command - parse a sentence and list its noun phrase chunks

use anyhow::Result;
use clap::Parser;

use crate::parser::{ChartParser, Grammar, np_chunks};

#[derive(Parser, Debug)]
#[command(about = "Parse a sentence and list its noun phrase chunks")]
pub struct ParseArgs {
    /// Sentence to parse; a single quoted argument also works
    #[arg(required = true)]
    pub words: Vec<String>,
}

pub fn execute(args: ParseArgs) -> Result<()> {
    // Lowercase and keep only tokens with at least one alphabetic
    // character; splitting tolerates a fully quoted sentence.
    let words: Vec<String> = args
        .words
        .iter()
        .flat_map(|chunk| chunk.split_whitespace())
        .map(str::to_lowercase)
        .filter(|word| word.chars().any(|c| c.is_alphabetic()))
        .collect();

    let grammar = demo_grammar()?;
    let parser = ChartParser::new(&grammar);
    let trees = parser.parse(&words)?;

    if trees.is_empty() {
        println!("Could not parse sentence.");
        return Ok(());
    }

    for tree in &trees {
        println!("{}", tree.pretty());
        println!();
        println!("Noun Phrase Chunks");
        for chunk in np_chunks(tree) {
            println!("  {}", chunk.leaves().join(" "));
        }
        println!();
    }

    Ok(())
}

/// The built-in demonstration grammar: a small fragment of English with
/// the vocabulary of a handful of Sherlock Holmes sentences.
pub fn demo_grammar() -> crate::Result<Grammar> {
    use crate::parser::Term;

    let nt = Term::nonterminal;

    let mut g = Grammar::new("S");

    g.add_rule("S", vec![nt("PART")])?;
    g.add_rule("S", vec![nt("PART"), nt("Conj"), nt("PART")])?;
    g.add_rule("PART", vec![nt("NP"), nt("VP")])?;
    g.add_rule("PART", vec![nt("NP"), nt("Adv"), nt("VP")])?;
    g.add_rule("PART", vec![nt("VP")])?;
    g.add_rule("NP", vec![nt("N")])?;
    g.add_rule("NP", vec![nt("NA"), nt("N")])?;
    g.add_rule("NA", vec![nt("Det")])?;
    g.add_rule("NA", vec![nt("Adj")])?;
    g.add_rule("NA", vec![nt("NA"), nt("NA")])?;
    g.add_rule("VP", vec![nt("V")])?;
    g.add_rule("VP", vec![nt("V"), nt("SUPP")])?;
    g.add_rule("SUPP", vec![nt("NP")])?;
    g.add_rule("SUPP", vec![nt("P")])?;
    g.add_rule("SUPP", vec![nt("Adv")])?;
    g.add_rule("SUPP", vec![nt("SUPP"), nt("SUPP")])?;
    g.add_rule("SUPP", vec![nt("SUPP"), nt("SUPP"), nt("SUPP")])?;

    g.add_words(
        "Adj",
        &["country", "dreadful", "enigmatical", "little", "moist", "red"],
    )?;
    g.add_words("Adv", &["down", "here", "never"])?;
    g.add_words("Conj", &["and", "until"])?;
    g.add_words("Det", &["a", "an", "his", "my", "the"])?;
    g.add_words(
        "N",
        &[
            "armchair",
            "companion",
            "day",
            "door",
            "hand",
            "he",
            "himself",
            "holmes",
            "home",
            "i",
            "mess",
            "paint",
            "palm",
            "pipe",
            "she",
            "smile",
            "thursday",
            "walk",
            "we",
            "word",
        ],
    )?;
    g.add_words("P", &["at", "before", "in", "of", "on", "to"])?;
    g.add_words(
        "V",
        &[
            "arrived", "came", "chuckled", "had", "lit", "said", "sat", "smiled", "tell", "were",
        ],
    )?;

    Ok(g)
}
