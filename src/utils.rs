//! Utility functions for the trivium crate

use rand::{Rng, distr::StandardUniform, prelude::IndexedRandom};

/// Normalize weights to probabilities that sum to 1.0.
///
/// # Returns
///
/// - `Some(Vec<f64>)` containing normalized probabilities if total weight is positive
/// - `None` if total weight is zero, negative, or non-finite
pub fn normalize_weights<I>(weights: I) -> Option<Vec<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let weights_vec: Vec<f64> = weights.into_iter().collect();
    if weights_vec.is_empty() {
        return None;
    }

    let sum: f64 = weights_vec.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return None;
    }

    Some(weights_vec.iter().map(|&w| w / sum).collect())
}

/// Performs weighted random sampling from a collection of items.
///
/// # Behavior
///
/// - If all weights are zero or negative, falls back to uniform random selection
/// - The last item is returned as a fallback if the threshold never crosses
///   zero (numerical stability)
///
/// # Returns
///
/// - `Some(item)` if sampling succeeds
/// - `None` if the items slice is empty
pub fn weighted_sample<R, T, W>(rng: &mut R, items: &[(T, W)]) -> Option<T>
where
    R: Rng,
    T: Clone,
    W: Into<f64> + Copy,
{
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|(_, w)| (*w).into()).sum();
    if total <= 0.0 {
        return items.choose(rng).map(|(item, _)| item.clone());
    }

    let mut threshold = rng.sample::<f64, _>(StandardUniform) * total;
    for (item, weight) in items {
        let w = (*weight).into();
        if threshold < w {
            return Some(item.clone());
        }
        threshold -= w;
    }

    items.last().map(|(item, _)| item.clone())
}
