//! Context-free grammar representation
//!
//! Grammars are assembled programmatically: `add_rule` for structural
//! productions and `add_words` for terminal alternation lists. Right-hand
//! sides must be non-empty; ε-productions are unsupported by design.

use serde::{Deserialize, Serialize};

/// One element of a production's right-hand side
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A literal word
    Terminal(String),
    /// A reference to another symbol of the grammar
    NonTerminal(String),
}

impl Term {
    pub fn terminal(word: impl Into<String>) -> Self {
        Term::Terminal(word.into())
    }

    pub fn nonterminal(name: impl Into<String>) -> Self {
        Term::NonTerminal(name.into())
    }
}

/// A single production `lhs -> rhs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub lhs: String,
    pub rhs: Vec<Term>,
}

/// A context-free grammar: a start symbol and its productions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grammar {
    start: String,
    productions: Vec<Production>,
}

impl Grammar {
    /// Create a grammar with the given start symbol and no productions
    pub fn new(start: impl Into<String>) -> Self {
        Grammar {
            start: start.into(),
            productions: Vec::new(),
        }
    }

    /// The start symbol
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Add a production.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyProduction` for an empty right-hand side.
    pub fn add_rule(&mut self, lhs: impl Into<String>, rhs: Vec<Term>) -> crate::Result<()> {
        let lhs = lhs.into();
        if rhs.is_empty() {
            return Err(crate::Error::EmptyProduction { symbol: lhs });
        }
        self.productions.push(Production { lhs, rhs });
        Ok(())
    }

    /// Add one unary terminal production per word (`lhs -> "word"`).
    ///
    /// This mirrors how lexicons are written: a part-of-speech symbol
    /// followed by its word alternatives.
    pub fn add_words(&mut self, lhs: &str, words: &[&str]) -> crate::Result<()> {
        for word in words {
            self.add_rule(lhs, vec![Term::terminal(*word)])?;
        }
        Ok(())
    }

    /// All productions, in insertion order
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Productions with the given left-hand side
    pub fn productions_for<'a>(&'a self, lhs: &'a str) -> impl Iterator<Item = &'a Production> {
        self.productions.iter().filter(move |p| p.lhs == lhs)
    }

    /// Every distinct symbol name, from left-hand sides and right-hand
    /// side references alike, in first-appearance order
    pub fn symbols(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for production in &self.productions {
            if !seen.contains(&production.lhs.as_str()) {
                seen.push(production.lhs.as_str());
            }
            for term in &production.rhs {
                if let Term::NonTerminal(name) = term {
                    if !seen.contains(&name.as_str()) {
                        seen.push(name.as_str());
                    }
                }
            }
        }
        seen
    }

    /// Whether any terminal production covers the word
    pub fn covers(&self, word: &str) -> bool {
        self.productions.iter().any(|p| {
            p.rhs
                .iter()
                .any(|term| matches!(term, Term::Terminal(w) if w == word))
        })
    }
}
