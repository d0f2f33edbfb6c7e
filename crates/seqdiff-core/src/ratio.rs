//! Similarity ratios.
//!
//! All three estimators return values in `[0.0, 1.0]` and satisfy
//! `real_quick >= quick >= exact` for the same pair of sequences, so callers
//! can discard candidates with the cheap bounds before paying for the exact
//! figure.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::Match;

/// `2 * matches / total`, with two empty sequences counting as identical.
pub fn calculate(matches: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matches as f64 / total as f64
    }
}

/// Exact ratio from a matching-block list.
pub fn from_blocks(blocks: &[Match], len_a: usize, len_b: usize) -> f64 {
    let matches = blocks.iter().map(|m| m.size).sum();
    calculate(matches, len_a + len_b)
}

/// Occurrence count of every element of `b`.
pub fn element_counts<T: Eq + Hash + Clone>(b: &[T]) -> FxHashMap<T, usize> {
    let mut counts: FxHashMap<T, usize> = FxHashMap::default();
    for elt in b {
        match counts.get_mut(elt) {
            Some(n) => *n += 1,
            None => {
                counts.insert(elt.clone(), 1);
            }
        }
    }
    counts
}

/// Ratio from the size of the multiset intersection of `a` and B, where
/// `b_counts` holds B's element counts. Ignores order entirely.
pub fn quick<T: Eq + Hash>(a: &[T], b_counts: &FxHashMap<T, usize>, len_b: usize) -> f64 {
    let mut avail: FxHashMap<&T, usize> = FxHashMap::default();
    let mut matches = 0;
    for elt in a {
        let left = avail
            .entry(elt)
            .or_insert_with(|| b_counts.get(elt).copied().unwrap_or(0));
        if *left > 0 {
            *left -= 1;
            matches += 1;
        }
    }
    calculate(matches, a.len() + len_b)
}

/// Ratio from the lengths alone: the best any pair of that shape could do.
pub fn real_quick(len_a: usize, len_b: usize) -> f64 {
    calculate(len_a.min(len_b), len_a + len_b)
}
