//! Integration tests for sentence parsing and noun phrase chunking

use trivium::cli::commands::parse::demo_grammar;
use trivium::parser::{ChartParser, np_chunks};

fn words(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(str::to_string).collect()
}

#[test]
fn parses_a_minimal_sentence() {
    let grammar = demo_grammar().unwrap();
    let parser = ChartParser::new(&grammar);

    let trees = parser.parse(&words("holmes sat")).unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(
        trees[0].to_string(),
        "(S (PART (NP (N holmes)) (VP (V sat))))"
    );
}

#[test]
fn chunks_cover_subject_and_object() {
    let grammar = demo_grammar().unwrap();
    let parser = ChartParser::new(&grammar);

    let trees = parser.parse(&words("holmes lit a pipe")).unwrap();
    assert_eq!(trees.len(), 1);

    let chunks: Vec<String> = np_chunks(&trees[0])
        .iter()
        .map(|chunk| chunk.leaves().join(" "))
        .collect();
    assert_eq!(chunks, vec!["holmes", "a pipe"]);
}

#[test]
fn attachment_ambiguity_yields_multiple_trees() {
    let grammar = demo_grammar().unwrap();
    let parser = ChartParser::new(&grammar);

    let trees = parser
        .parse(&words("holmes lit a pipe in the armchair"))
        .unwrap();
    assert!(
        trees.len() >= 2,
        "expected an ambiguous parse, got {} tree(s)",
        trees.len()
    );

    // Every reading covers the same sentence
    for tree in &trees {
        assert_eq!(
            tree.leaves().join(" "),
            "holmes lit a pipe in the armchair"
        );
    }
}

#[test]
fn chunks_are_innermost_noun_phrases_only() {
    let grammar = demo_grammar().unwrap();
    let parser = ChartParser::new(&grammar);

    for tree in parser
        .parse(&words("holmes lit a pipe in the armchair"))
        .unwrap()
    {
        for chunk in np_chunks(&tree) {
            let nested = chunk
                .subtrees()
                .skip(1)
                .filter(|subtree| subtree.label() == Some("NP"))
                .count();
            assert_eq!(nested, 0, "chunk {chunk} contains a nested noun phrase");
        }
    }
}

#[test]
fn conjunction_sentences_parse() {
    let grammar = demo_grammar().unwrap();
    let parser = ChartParser::new(&grammar);

    let trees = parser.parse(&words("holmes sat and she smiled")).unwrap();
    assert!(!trees.is_empty());
}

#[test]
fn out_of_language_sentences_yield_no_trees() {
    let grammar = demo_grammar().unwrap();
    let parser = ChartParser::new(&grammar);
    assert!(parser.parse(&words("sat sat")).unwrap().is_empty());
}

#[test]
fn unknown_words_are_reported() {
    let grammar = demo_grammar().unwrap();
    let parser = ChartParser::new(&grammar);
    let err = parser.parse(&words("watson sat")).unwrap_err();
    assert!(err.to_string().contains("watson"));
}
