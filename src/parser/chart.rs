//! Bottom-up chart parsing
//!
//! The parser first closes a span table recording which symbols derive
//! which word ranges, working up from single words, then enumerates every
//! derivation tree off the table. Splitting a production's right-hand
//! side always assigns each term at least one word, so left-recursive
//! rules terminate; unit productions are closed to a fixed point within
//! each span. Grammars with unit-production cycles are truncated to
//! their acyclic derivations.

use std::collections::HashMap;

use super::{
    grammar::{Grammar, Term},
    tree::Tree,
};

/// `table[symbol][i][j]` records that the symbol derives `words[i..j]`
type SpanTable = Vec<Vec<Vec<bool>>>;

/// A parser for one grammar
pub struct ChartParser<'g> {
    grammar: &'g Grammar,
    symbols: Vec<String>,
    index: HashMap<String, usize>,
}

impl<'g> ChartParser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        let symbols: Vec<String> = grammar
            .symbols()
            .into_iter()
            .map(str::to_string)
            .collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        ChartParser {
            grammar,
            symbols,
            index,
        }
    }

    /// Parse a sentence of pre-split words into every derivation tree.
    ///
    /// An empty result means the sentence is not in the grammar's
    /// language; that is not an error.
    ///
    /// # Errors
    ///
    /// `Error::EmptySentence` for empty input and `Error::UnknownWord`
    /// for a word no terminal production covers.
    pub fn parse(&self, words: &[String]) -> crate::Result<Vec<Tree>> {
        if words.is_empty() {
            return Err(crate::Error::EmptySentence);
        }
        for word in words {
            if !self.grammar.covers(word) {
                return Err(crate::Error::UnknownWord { word: word.clone() });
            }
        }

        let table = self.fill_table(words);
        let Some(&start) = self.index.get(self.grammar.start()) else {
            return Ok(Vec::new());
        };
        if !table[start][0][words.len()] {
            return Ok(Vec::new());
        }

        let mut active = Vec::new();
        Ok(self.symbol_trees(start, 0, words.len(), words, &table, &mut active))
    }

    /// Close the span table bottom-up.
    ///
    /// Any production term spanning strictly fewer words is settled by
    /// the time a span is processed; unit productions, which depend on
    /// the same span, are iterated to a fixed point.
    fn fill_table(&self, words: &[String]) -> SpanTable {
        let n = words.len();
        let mut table: SpanTable = vec![vec![vec![false; n + 1]; n + 1]; self.symbols.len()];

        for length in 1..=n {
            for i in 0..=(n - length) {
                let j = i + length;
                loop {
                    let mut changed = false;
                    for production in self.grammar.productions() {
                        let symbol = self.index[&production.lhs];
                        if table[symbol][i][j] {
                            continue;
                        }
                        if self.sequence_derives(&production.rhs, i, j, words, &table) {
                            table[symbol][i][j] = true;
                            changed = true;
                        }
                    }
                    if !changed {
                        break;
                    }
                }
            }
        }

        table
    }

    fn term_derives(
        &self,
        term: &Term,
        i: usize,
        j: usize,
        words: &[String],
        table: &SpanTable,
    ) -> bool {
        match term {
            Term::Terminal(word) => j == i + 1 && words[i] == *word,
            Term::NonTerminal(name) => self
                .index
                .get(name)
                .is_some_and(|&symbol| table[symbol][i][j]),
        }
    }

    fn sequence_derives(
        &self,
        seq: &[Term],
        i: usize,
        j: usize,
        words: &[String],
        table: &SpanTable,
    ) -> bool {
        if seq.len() == 1 {
            return self.term_derives(&seq[0], i, j, words, table);
        }
        if j - i < seq.len() {
            return false;
        }

        // Every later term needs at least one word
        let reserve = seq.len() - 1;
        for k in (i + 1)..=(j - reserve) {
            if self.term_derives(&seq[0], i, k, words, table)
                && self.sequence_derives(&seq[1..], k, j, words, table)
            {
                return true;
            }
        }
        false
    }

    /// Every derivation tree of `symbol` over `words[i..j]`.
    ///
    /// `active` holds the `(symbol, i, j)` derivations currently being
    /// expanded; re-entering one means a unit-production cycle, which is
    /// cut off rather than recursed into.
    fn symbol_trees(
        &self,
        symbol: usize,
        i: usize,
        j: usize,
        words: &[String],
        table: &SpanTable,
        active: &mut Vec<(usize, usize, usize)>,
    ) -> Vec<Tree> {
        if !table[symbol][i][j] {
            return Vec::new();
        }
        let key = (symbol, i, j);
        if active.contains(&key) {
            return Vec::new();
        }
        active.push(key);

        let name = &self.symbols[symbol];
        let mut trees = Vec::new();
        for production in self.grammar.productions_for(name) {
            for children in self.child_sequences(&production.rhs, i, j, words, table, active) {
                trees.push(Tree::node(name.clone(), children));
            }
        }

        active.pop();
        trees
    }

    fn term_trees(
        &self,
        term: &Term,
        i: usize,
        j: usize,
        words: &[String],
        table: &SpanTable,
        active: &mut Vec<(usize, usize, usize)>,
    ) -> Vec<Tree> {
        match term {
            Term::Terminal(word) => {
                if j == i + 1 && words[i] == *word {
                    vec![Tree::leaf(word.clone())]
                } else {
                    Vec::new()
                }
            }
            Term::NonTerminal(name) => match self.index.get(name) {
                Some(&symbol) => self.symbol_trees(symbol, i, j, words, table, active),
                None => Vec::new(),
            },
        }
    }

    /// Every way to split `words[i..j]` across the right-hand side terms,
    /// as child-tree lists
    fn child_sequences(
        &self,
        seq: &[Term],
        i: usize,
        j: usize,
        words: &[String],
        table: &SpanTable,
        active: &mut Vec<(usize, usize, usize)>,
    ) -> Vec<Vec<Tree>> {
        if seq.len() == 1 {
            return self
                .term_trees(&seq[0], i, j, words, table, active)
                .into_iter()
                .map(|tree| vec![tree])
                .collect();
        }
        if j - i < seq.len() {
            return Vec::new();
        }

        let reserve = seq.len() - 1;
        let mut sequences = Vec::new();
        for k in (i + 1)..=(j - reserve) {
            let firsts = self.term_trees(&seq[0], i, k, words, table, active);
            if firsts.is_empty() {
                continue;
            }
            let rests = self.child_sequences(&seq[1..], k, j, words, table, active);
            for rest in &rests {
                for first in &firsts {
                    let mut children = Vec::with_capacity(seq.len());
                    children.push(first.clone());
                    children.extend(rest.iter().cloned());
                    sequences.push(children);
                }
            }
        }
        sequences
    }
}
