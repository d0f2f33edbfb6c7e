//! Index of sequence B: element positions plus junk and popular classification.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::AUTOJUNK_MIN_LEN;

/// Positions of every anchor-eligible element of B, and the sets of elements
/// excluded from anchoring.
///
/// Junk elements come from the caller's predicate. Popular elements come from
/// the autojunk heuristic. Neither appears in the position map, so neither
/// can seed a match, but both are still compared when a match is grown at
/// its boundaries.
#[derive(Debug, Clone)]
pub struct SequenceIndex<T> {
    b2j: FxHashMap<T, Vec<usize>>,
    junk: FxHashSet<T>,
    popular: FxHashSet<T>,
    /// Per position of B, whether the element there is junk. Empty when
    /// nothing is junk.
    junk_mask: Vec<bool>,
}

impl<T: Eq + Hash + Clone> SequenceIndex<T> {
    /// Index `b`, classifying junk with `is_junk` and, when `autojunk` is
    /// set and `b` has at least [`AUTOJUNK_MIN_LEN`] elements, classifying
    /// any element seen more than `len / 100 + 1` times as popular.
    pub fn build(b: &[T], is_junk: Option<&dyn Fn(&T) -> bool>, autojunk: bool) -> Self {
        let mut b2j: FxHashMap<T, Vec<usize>> = FxHashMap::default();
        for (j, elt) in b.iter().enumerate() {
            match b2j.get_mut(elt) {
                Some(positions) => positions.push(j),
                None => {
                    b2j.insert(elt.clone(), vec![j]);
                }
            }
        }

        let mut junk = FxHashSet::default();
        if let Some(is_junk) = is_junk {
            b2j.retain(|elt, _| {
                if is_junk(elt) {
                    junk.insert(elt.clone());
                    false
                } else {
                    true
                }
            });
        }

        let mut popular = FxHashSet::default();
        let n = b.len();
        if autojunk && n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|elt, positions| {
                if positions.len() > ntest {
                    popular.insert(elt.clone());
                    false
                } else {
                    true
                }
            });
        }

        let junk_mask = if junk.is_empty() {
            Vec::new()
        } else {
            b.iter().map(|elt| junk.contains(elt)).collect()
        };

        tracing::debug!(
            len = n,
            distinct = b2j.len(),
            junk = junk.len(),
            popular = popular.len(),
            "indexed sequence b"
        );

        Self {
            b2j,
            junk,
            popular,
            junk_mask,
        }
    }

    /// Ascending positions in B where `elt` occurs, or an empty slice when
    /// `elt` is absent, junk, or popular.
    pub fn positions(&self, elt: &T) -> &[usize] {
        self.b2j.get(elt).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if `elt` was classified junk by the caller's predicate.
    pub fn is_junk(&self, elt: &T) -> bool {
        self.junk.contains(elt)
    }

    /// True if `elt` was classified popular by the autojunk heuristic.
    pub fn is_popular(&self, elt: &T) -> bool {
        self.popular.contains(elt)
    }

    pub fn junk(&self) -> &FxHashSet<T> {
        &self.junk
    }

    pub fn popular(&self) -> &FxHashSet<T> {
        &self.popular
    }

    /// Number of distinct anchor-eligible elements.
    pub fn distinct(&self) -> usize {
        self.b2j.len()
    }
}

impl<T> SequenceIndex<T> {
    /// True if the element at position `j` of B is junk.
    pub(crate) fn is_junk_at(&self, j: usize) -> bool {
        self.junk_mask.get(j).copied().unwrap_or(false)
    }
}
