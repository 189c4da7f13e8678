//! In-memory hyperlink corpus

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// A corpus of pages and the outbound links between them.
///
/// Only links between corpus pages are kept; self-links and links to
/// unknown pages are discarded on construction. How the link map is
/// obtained (crawling, fixtures, deserialization) is the caller's
/// concern.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Corpus {
    links: HashMap<String, HashSet<String>>,
}

impl Corpus {
    /// Build a corpus from `(page, outbound links)` entries.
    ///
    /// Pages that only appear as link targets are not part of the corpus;
    /// links to them are dropped, as are self-links.
    pub fn from_links<I, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, L)>,
        L: IntoIterator<Item = String>,
    {
        let mut links: HashMap<String, HashSet<String>> = HashMap::new();
        for (page, targets) in entries {
            let outbound = links.entry(page.clone()).or_default();
            for target in targets {
                if target != page {
                    outbound.insert(target);
                }
            }
        }

        let pages: HashSet<String> = links.keys().cloned().collect();
        for outbound in links.values_mut() {
            outbound.retain(|target| pages.contains(target));
        }

        Corpus { links }
    }

    /// Page names in sorted order.
    ///
    /// The ordering is stable so that seeded sampling over the corpus is
    /// reproducible.
    pub fn pages(&self) -> Vec<&str> {
        let mut pages: Vec<&str> = self.links.keys().map(String::as_str).collect();
        pages.sort_unstable();
        pages
    }

    /// Outbound links of a page, or `None` for unknown pages
    pub fn links(&self, page: &str) -> Option<&HashSet<String>> {
        self.links.get(page)
    }

    /// Whether the corpus contains a page
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_links([
            (
                "1.html".to_string(),
                vec!["2.html".to_string(), "1.html".to_string()],
            ),
            (
                "2.html".to_string(),
                vec!["1.html".to_string(), "missing.html".to_string()],
            ),
            ("3.html".to_string(), vec![]),
        ])
    }

    #[test]
    fn drops_self_links() {
        let corpus = corpus();
        assert!(!corpus.links("1.html").unwrap().contains("1.html"));
        assert!(corpus.links("1.html").unwrap().contains("2.html"));
    }

    #[test]
    fn drops_links_to_pages_outside_the_corpus() {
        let corpus = corpus();
        let links = corpus.links("2.html").unwrap();
        assert!(!links.contains("missing.html"));
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn pages_are_sorted() {
        assert_eq!(corpus().pages(), vec!["1.html", "2.html", "3.html"]);
    }

    #[test]
    fn dangling_pages_stay_in_the_corpus() {
        let corpus = corpus();
        assert!(corpus.contains("3.html"));
        assert!(corpus.links("3.html").unwrap().is_empty());
    }
}
