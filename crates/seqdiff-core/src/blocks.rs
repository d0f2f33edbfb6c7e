//! Assembly of the full matching-block cover.

use std::hash::Hash;

use crate::index::SequenceIndex;
use crate::search::{SearchStrategy, Searcher, Window};
use crate::Match;

/// Decompose `a` and `b` into matching blocks.
///
/// Finds the longest match of the whole window, then repeats on the windows
/// left and right of it, using an explicit stack so adversarial inputs cannot
/// exhaust the call stack. The result is sorted, adjacent blocks that touch
/// in both sequences are merged, and a zero-length sentinel
/// `(a.len(), b.len(), 0)` closes the list.
pub(crate) fn matching_blocks<T: Eq + Hash + Clone>(
    a: &[T],
    b: &[T],
    index: &SequenceIndex<T>,
    strategy: SearchStrategy,
) -> Vec<Match> {
    let mut searcher = Searcher::new(strategy);
    let mut pending = vec![Window::new(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some(w) = pending.pop() {
        let m = searcher.longest_match(a, b, index, w);
        if m.size == 0 {
            continue;
        }
        if w.a_low < m.a && w.b_low < m.b {
            pending.push(Window::new(w.a_low, m.a, w.b_low, m.b));
        }
        if m.a_end() < w.a_high && m.b_end() < w.b_high {
            pending.push(Window::new(m.a_end(), w.a_high, m.b_end(), w.b_high));
        }
        found.push(m);
    }
    found.sort_unstable();

    let mut blocks = merge_adjacent(found);
    blocks.push(Match::new(a.len(), b.len(), 0));

    tracing::debug!(
        blocks = blocks.len() - 1,
        matched = blocks.iter().map(|m| m.size).sum::<usize>(),
        "computed matching blocks"
    );
    blocks
}

/// Collapse runs of sorted blocks where each one starts exactly where the
/// previous one ends in both sequences.
fn merge_adjacent(sorted: Vec<Match>) -> Vec<Match> {
    let mut merged: Vec<Match> = Vec::with_capacity(sorted.len() + 1);
    for m in sorted {
        match merged.last_mut() {
            Some(last) if last.a_end() == m.a && last.b_end() == m.b => last.size += m.size,
            _ => merged.push(m),
        }
    }
    merged
}
