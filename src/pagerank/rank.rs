//! PageRank estimation by random-walk sampling and by power iteration

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::corpus::Corpus;
use crate::utils::weighted_sample;

/// Default damping factor
pub const DAMPING: f64 = 0.85;

/// Default number of random-walk samples
pub const SAMPLES: usize = 10_000;

/// Power iteration stops once no rank moves by more than this
const CONVERGENCE_THRESHOLD: f64 = 1e-3;

/// Estimator parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Probability of following an outbound link rather than teleporting
    pub damping: f64,
    /// Length of the sampled random walk
    pub samples: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
        }
    }
}

impl PageRankConfig {
    /// Validate the parameters
    pub fn validate(&self) -> crate::Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(crate::Error::InvalidSampleCount);
        }
        Ok(())
    }
}

fn check_damping(damping: f64) -> crate::Result<()> {
    if !(damping > 0.0 && damping < 1.0) {
        return Err(crate::Error::InvalidDamping { value: damping });
    }
    Ok(())
}

/// Probability distribution over which page a random surfer visits next.
///
/// With probability `damping` the surfer follows one of `page`'s outbound
/// links uniformly; with probability `1 - damping` it jumps to any corpus
/// page uniformly. A page with no outbound links is treated as linking to
/// every page, itself included.
///
/// Pages are returned in sorted order and the probabilities sum to 1.
///
/// # Errors
///
/// `Error::UnknownPage` if `page` is not in the corpus,
/// `Error::InvalidDamping` for a damping factor outside `(0, 1)`.
pub fn transition_model(
    corpus: &Corpus,
    page: &str,
    damping: f64,
) -> crate::Result<Vec<(String, f64)>> {
    check_damping(damping)?;
    let outbound = corpus.links(page).ok_or_else(|| crate::Error::UnknownPage {
        page: page.to_string(),
    })?;

    let pages = corpus.pages();
    let n = pages.len() as f64;
    let dangling = outbound.is_empty();
    let link_count = if dangling { n } else { outbound.len() as f64 };

    let distribution = pages
        .into_iter()
        .map(|target| {
            let mut probability = (1.0 - damping) / n;
            if dangling || outbound.contains(target) {
                probability += damping / link_count;
            }
            (target.to_string(), probability)
        })
        .collect();

    Ok(distribution)
}

/// Estimate PageRank by sampling a random walk through the corpus.
///
/// The walk starts on a uniformly random page and takes
/// `config.samples - 1` steps through `transition_model`; each page's
/// rank is its visit frequency. Ranks sum to 1. Deterministic for a
/// seeded generator.
///
/// # Errors
///
/// `Error::EmptyCorpus` for a corpus with no pages, plus the
/// configuration errors from `PageRankConfig::validate`.
pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    config: &PageRankConfig,
    rng: &mut R,
) -> crate::Result<HashMap<String, f64>> {
    config.validate()?;
    if corpus.is_empty() {
        return Err(crate::Error::EmptyCorpus);
    }

    let pages = corpus.pages();
    let mut visits: HashMap<String, usize> =
        pages.iter().map(|&page| (page.to_string(), 0)).collect();

    let mut current = pages[rng.random_range(0..pages.len())].to_string();
    if let Some(count) = visits.get_mut(&current) {
        *count += 1;
    }

    for _ in 1..config.samples {
        let distribution = transition_model(corpus, &current, config.damping)?;
        current = weighted_sample(rng, &distribution).ok_or(crate::Error::EmptyCorpus)?;
        if let Some(count) = visits.get_mut(&current) {
            *count += 1;
        }
    }

    let total = config.samples as f64;
    Ok(visits
        .into_iter()
        .map(|(page, count)| (page, count as f64 / total))
        .collect())
}

/// Estimate PageRank by iterating the rank equation to a fixed point.
///
/// Ranks start uniform at `1/N` and are repeatedly recomputed as
/// `(1 - d)/N + d * Σ incoming`, where a linking page contributes
/// `rank/outdegree` and a dangling page contributes `rank/N` to every
/// page. Iteration stops when no rank moves by more than `1e-3`.
///
/// # Errors
///
/// `Error::EmptyCorpus` for a corpus with no pages,
/// `Error::InvalidDamping` for a damping factor outside `(0, 1)`.
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> crate::Result<HashMap<String, f64>> {
    check_damping(damping)?;
    if corpus.is_empty() {
        return Err(crate::Error::EmptyCorpus);
    }

    let pages = corpus.pages();
    let n = pages.len() as f64;

    let mut ranks: HashMap<String, f64> = pages
        .iter()
        .map(|&page| (page.to_string(), 1.0 / n))
        .collect();

    loop {
        let mut next: HashMap<String, f64> = HashMap::with_capacity(ranks.len());

        for &page in &pages {
            let mut incoming = 0.0;
            for &source in &pages {
                let Some(outbound) = corpus.links(source) else {
                    continue;
                };
                let rank = ranks[source];
                if outbound.is_empty() {
                    incoming += rank / n;
                } else if outbound.contains(page) {
                    incoming += rank / outbound.len() as f64;
                }
            }
            next.insert(
                page.to_string(),
                (1.0 - damping) / n + damping * incoming,
            );
        }

        let converged = pages
            .iter()
            .all(|&page| (next[page] - ranks[page]).abs() <= CONVERGENCE_THRESHOLD);

        ranks = next;
        if converged {
            return Ok(ranks);
        }
    }
}
