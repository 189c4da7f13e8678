//! Parse trees and phrase chunk extraction

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in a parse tree: either a word or a labeled phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tree {
    Leaf { word: String },
    Node { label: String, children: Vec<Tree> },
}

impl Tree {
    pub fn leaf(word: impl Into<String>) -> Self {
        Tree::Leaf { word: word.into() }
    }

    pub fn node(label: impl Into<String>, children: Vec<Tree>) -> Self {
        Tree::Node {
            label: label.into(),
            children,
        }
    }

    /// The phrase label, or `None` for a leaf
    pub fn label(&self) -> Option<&str> {
        match self {
            Tree::Leaf { .. } => None,
            Tree::Node { label, .. } => Some(label),
        }
    }

    /// Every subtree in pre-order, the tree itself included
    pub fn subtrees(&self) -> Subtrees<'_> {
        Subtrees { stack: vec![self] }
    }

    /// The words of the covered sentence fragment, left to right
    pub fn leaves(&self) -> Vec<&str> {
        let mut words = Vec::new();
        for subtree in self.subtrees() {
            if let Tree::Leaf { word } = subtree {
                words.push(word.as_str());
            }
        }
        words
    }

    /// Indented multi-line rendering.
    ///
    /// Nodes whose children are all leaves stay on one line.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(0, &mut out);
        out
    }

    fn pretty_into(&self, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match self {
            Tree::Leaf { word } => {
                out.push_str(&pad);
                out.push_str(word);
            }
            Tree::Node { label, children } => {
                let all_leaves = children.iter().all(|c| matches!(c, Tree::Leaf { .. }));
                if all_leaves {
                    out.push_str(&format!("{pad}({label} {})", self.leaves().join(" ")));
                } else {
                    out.push_str(&format!("{pad}({label}"));
                    for child in children {
                        out.push('\n');
                        child.pretty_into(indent + 1, out);
                    }
                    out.push(')');
                }
            }
        }
    }
}

impl fmt::Display for Tree {
    /// S-expression form, e.g. `(S (NP (N holmes)) (VP (V sat)))`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf { word } => write!(f, "{word}"),
            Tree::Node { label, children } => {
                write!(f, "({label}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Pre-order subtree iterator
pub struct Subtrees<'t> {
    stack: Vec<&'t Tree>,
}

impl<'t> Iterator for Subtrees<'t> {
    type Item = &'t Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        if let Tree::Node { children, .. } = tree {
            for child in children.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(tree)
    }
}

/// Every subtree with the given label that does not itself contain
/// another subtree with that label.
pub fn chunks<'t>(tree: &'t Tree, label: &str) -> Vec<&'t Tree> {
    tree.subtrees()
        .filter(|subtree| {
            subtree.label() == Some(label)
                && !subtree
                    .subtrees()
                    .skip(1)
                    .any(|descendant| descendant.label() == Some(label))
        })
        .collect()
}

/// Noun phrase chunks: innermost `NP` subtrees
pub fn np_chunks(tree: &Tree) -> Vec<&Tree> {
    chunks(tree, "NP")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        // (S (NP (Det the) (N smile)) (VP (V came)))
        Tree::node(
            "S",
            vec![
                Tree::node(
                    "NP",
                    vec![
                        Tree::node("Det", vec![Tree::leaf("the")]),
                        Tree::node("N", vec![Tree::leaf("smile")]),
                    ],
                ),
                Tree::node("VP", vec![Tree::node("V", vec![Tree::leaf("came")])]),
            ],
        )
    }

    #[test]
    fn leaves_read_left_to_right() {
        assert_eq!(sample().leaves(), vec!["the", "smile", "came"]);
    }

    #[test]
    fn display_is_an_s_expression() {
        assert_eq!(
            sample().to_string(),
            "(S (NP (Det the) (N smile)) (VP (V came)))"
        );
    }

    #[test]
    fn subtrees_are_preorder() {
        let sample = sample();
        let labels: Vec<_> = sample.subtrees().filter_map(|t| t.label()).collect();
        assert_eq!(labels, vec!["S", "NP", "Det", "N", "VP", "V"]);
    }

    #[test]
    fn chunks_keep_only_innermost_matches() {
        // (S (NP (Det a) (NP (N word))))
        let nested = Tree::node(
            "S",
            vec![Tree::node(
                "NP",
                vec![
                    Tree::node("Det", vec![Tree::leaf("a")]),
                    Tree::node("NP", vec![Tree::node("N", vec![Tree::leaf("word")])]),
                ],
            )],
        );

        let found = np_chunks(&nested);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].leaves(), vec!["word"]);
    }

    #[test]
    fn chunking_a_tree_without_matches_is_empty() {
        let tree = Tree::node("VP", vec![Tree::node("V", vec![Tree::leaf("sat")])]);
        assert!(np_chunks(&tree).is_empty());
    }
}
