//! Longest matching block search.
//!
//! The search walks A's sub-range row by row. For every position `j` in B
//! where `a[i]` occurs, the run ending at `(i, j)` is one longer than the
//! run ending at `(i - 1, j - 1)`. Only the previous row's lengths are
//! needed, and only at positions that matched, so the work is proportional
//! to the number of matching `(i, j)` pairs rather than to the area of the
//! window.
//!
//! Two interchangeable tables hold the per-row lengths. [`SearchStrategy::Arena`]
//! uses flat arrays indexed by offset into the B window and clears only the
//! slots it touched; [`SearchStrategy::HashMap`] keeps sparse hash maps. Both
//! produce identical results.

use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;

use crate::index::SequenceIndex;
use crate::Match;

/// Inner loop used by the longest-match search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Flat per-row length arrays indexed by offset into the B window.
    #[default]
    Arena,
    /// Sparse per-row length maps keyed by position in B.
    HashMap,
}

/// Half-open sub-ranges of A and B to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub a_low: usize,
    pub a_high: usize,
    pub b_low: usize,
    pub b_high: usize,
}

impl Window {
    pub fn new(a_low: usize, a_high: usize, b_low: usize, b_high: usize) -> Self {
        Self {
            a_low,
            a_high,
            b_low,
            b_high,
        }
    }

    fn is_empty(&self) -> bool {
        self.a_low >= self.a_high || self.b_low >= self.b_high
    }
}

/// Reusable scratch space for repeated searches over the same sequences.
pub(crate) enum Searcher {
    Arena(ArenaTable),
    HashMap(MapTable),
}

impl Searcher {
    pub fn new(strategy: SearchStrategy) -> Self {
        match strategy {
            SearchStrategy::Arena => Searcher::Arena(ArenaTable::default()),
            SearchStrategy::HashMap => Searcher::HashMap(MapTable::default()),
        }
    }

    /// Best matching block inside `w`: longest, then earliest in A, then
    /// earliest in B, grown at both ends through junk and popular elements.
    ///
    /// The caller guarantees `w` lies within both sequences.
    pub fn longest_match<T: Eq + Hash + Clone>(
        &mut self,
        a: &[T],
        b: &[T],
        index: &SequenceIndex<T>,
        w: Window,
    ) -> Match {
        let anchor = if w.is_empty() {
            Match::new(w.a_low, w.b_low, 0)
        } else {
            match self {
                Searcher::Arena(table) => table.anchor(a, index, w),
                Searcher::HashMap(table) => table.anchor(a, index, w),
            }
        };
        extend(a, b, index, w, anchor)
    }
}

/// Lengths of runs ending in the previous and current rows, stored densely
/// by `j - b_low`.
///
/// Between searches every slot is zero; each row records which slots it set
/// so they can be cleared without sweeping the whole window.
#[derive(Debug, Default)]
pub(crate) struct ArenaTable {
    prev: Vec<usize>,
    next: Vec<usize>,
    prev_touched: Vec<usize>,
    next_touched: Vec<usize>,
}

impl ArenaTable {
    fn anchor<T: Eq + Hash + Clone>(&mut self, a: &[T], index: &SequenceIndex<T>, w: Window) -> Match {
        let width = w.b_high - w.b_low;
        if self.prev.len() < width {
            self.prev.resize(width, 0);
            self.next.resize(width, 0);
        }

        let (mut best_i, mut best_j, mut best_size) = (w.a_low, w.b_low, 0);
        for (i, elt) in a.iter().enumerate().take(w.a_high).skip(w.a_low) {
            let positions = index.positions(elt);
            let first = positions.partition_point(|&j| j < w.b_low);
            for &j in &positions[first..] {
                if j >= w.b_high {
                    break;
                }
                let off = j - w.b_low;
                let k = if off > 0 { self.prev[off - 1] } else { 0 } + 1;
                self.next[off] = k;
                self.next_touched.push(off);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
            self.advance_row();
        }
        // After the last row the lengths live in `prev`; zero them for the
        // next search.
        for off in self.prev_touched.drain(..) {
            self.prev[off] = 0;
        }

        Match::new(best_i, best_j, best_size)
    }

    /// Make the current row the previous one and start an empty row.
    fn advance_row(&mut self) {
        for &off in &self.prev_touched {
            self.prev[off] = 0;
        }
        self.prev_touched.clear();
        mem::swap(&mut self.prev, &mut self.next);
        mem::swap(&mut self.prev_touched, &mut self.next_touched);
    }
}

/// Lengths of runs ending in the previous and current rows, keyed by `j`.
#[derive(Debug, Default)]
pub(crate) struct MapTable {
    prev: FxHashMap<usize, usize>,
    next: FxHashMap<usize, usize>,
}

impl MapTable {
    fn anchor<T: Eq + Hash + Clone>(&mut self, a: &[T], index: &SequenceIndex<T>, w: Window) -> Match {
        self.prev.clear();
        self.next.clear();

        let (mut best_i, mut best_j, mut best_size) = (w.a_low, w.b_low, 0);
        for (i, elt) in a.iter().enumerate().take(w.a_high).skip(w.a_low) {
            for &j in index.positions(elt) {
                if j < w.b_low {
                    continue;
                }
                if j >= w.b_high {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|before| self.prev.get(&before))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                self.next.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
            mem::swap(&mut self.prev, &mut self.next);
            self.next.clear();
        }
        self.prev.clear();

        Match::new(best_i, best_j, best_size)
    }
}

/// Grow `m` at both ends while the elements agree, first through elements
/// of B that are not junk (popular ones included), then through junk.
fn extend<T: Eq + Hash>(a: &[T], b: &[T], index: &SequenceIndex<T>, w: Window, m: Match) -> Match {
    let Match {
        a: mut i,
        b: mut j,
        size: mut k,
    } = m;

    for junk_pass in [false, true] {
        while i > w.a_low && j > w.b_low && index.is_junk_at(j - 1) == junk_pass && a[i - 1] == b[j - 1] {
            i -= 1;
            j -= 1;
            k += 1;
        }
        while i + k < w.a_high
            && j + k < w.b_high
            && index.is_junk_at(j + k) == junk_pass
            && a[i + k] == b[j + k]
        {
            k += 1;
        }
    }

    Match::new(i, j, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(a: &str, b: &str, strategy: SearchStrategy) -> Match {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let index = SequenceIndex::build(&b, None, false);
        Searcher::new(strategy).longest_match(&a, &b, &index, Window::new(0, a.len(), 0, b.len()))
    }

    #[test]
    fn prefers_longest() {
        for s in [SearchStrategy::Arena, SearchStrategy::HashMap] {
            assert_eq!(search("xaxbx", "axbxa", s), Match::new(1, 0, 4));
        }
    }

    #[test]
    fn ties_prefer_earliest_in_a() {
        for s in [SearchStrategy::Arena, SearchStrategy::HashMap] {
            assert_eq!(search("ab", "ba", s), Match::new(0, 1, 1));
        }
    }

    #[test]
    fn ties_prefer_earliest_in_b() {
        for s in [SearchStrategy::Arena, SearchStrategy::HashMap] {
            assert_eq!(search("a", "bab a", s), Match::new(0, 1, 1));
        }
    }

    #[test]
    fn no_common_element_gives_empty_match_at_low_corner() {
        for s in [SearchStrategy::Arena, SearchStrategy::HashMap] {
            assert_eq!(search("abc", "xyz", s), Match::new(0, 0, 0));
        }
    }

    #[test]
    fn empty_window() {
        assert_eq!(search("", "abc", SearchStrategy::Arena), Match::new(0, 0, 0));
        assert_eq!(search("abc", "", SearchStrategy::HashMap), Match::new(0, 0, 0));
    }

    #[test]
    fn arena_is_clean_between_searches() {
        let a: Vec<char> = "abcabc".chars().collect();
        let b: Vec<char> = "abcxabc".chars().collect();
        let index = SequenceIndex::build(&b, None, false);
        let mut searcher = Searcher::new(SearchStrategy::Arena);
        let first = searcher.longest_match(&a, &b, &index, Window::new(0, 6, 0, 7));
        let sub = searcher.longest_match(&a, &b, &index, Window::new(3, 6, 4, 7));
        let again = searcher.longest_match(&a, &b, &index, Window::new(0, 6, 0, 7));
        assert_eq!(first, Match::new(0, 0, 3));
        assert_eq!(sub, Match::new(3, 4, 3));
        assert_eq!(again, first);
    }

    #[test]
    fn junk_grows_match_but_does_not_seed_it() {
        let a: Vec<char> = " abcd".chars().collect();
        let b: Vec<char> = "abcd abcd".chars().collect();
        let is_space: &dyn Fn(&char) -> bool = &|c| *c == ' ';
        let index = SequenceIndex::build(&b, Some(is_space), false);
        for s in [SearchStrategy::Arena, SearchStrategy::HashMap] {
            let m = Searcher::new(s).longest_match(&a, &b, &index, Window::new(0, 5, 0, 9));
            assert_eq!(m, Match::new(1, 0, 4));
        }
    }
}
