//! The comparison session: two sequences plus everything derived from them.

use std::fmt;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Side;
use crate::index::SequenceIndex;
use crate::search::{Searcher, Window};
use crate::{blocks, opcodes, ratio, Match, MatchError, MatcherOptions, Opcode, Result};

/// Caller-supplied classification of elements that must never anchor a match.
pub type JunkPredicate<T> = Box<dyn Fn(&T) -> bool>;

/// Compares two sequences of hashable elements.
///
/// Sequences are materialized into owned vectors on assignment. Derived data
/// is computed lazily and cached:
///
/// - assigning A drops the matching blocks and opcodes;
/// - assigning B rebuilds the index and drops every cache, unless the new B
///   equals the current one.
///
/// Methods that may fill a cache take `&mut self`. A matcher is a single
/// comparison session; use one per thread.
pub struct SequenceMatcher<T> {
    a: Vec<T>,
    b: Vec<T>,
    is_junk: Option<JunkPredicate<T>>,
    options: MatcherOptions,
    index: SequenceIndex<T>,
    b_counts: Option<FxHashMap<T, usize>>,
    matching_blocks: Option<Vec<Match>>,
    opcodes: Option<Vec<Opcode>>,
}

impl<T: Eq + Hash + Clone> SequenceMatcher<T> {
    /// Matcher with no junk and default options.
    pub fn new(a: impl IntoIterator<Item = T>, b: impl IntoIterator<Item = T>) -> Self {
        Self::with_options(None, a, b, MatcherOptions::default())
    }

    /// Matcher with a junk predicate and explicit options.
    pub fn with_options(
        is_junk: Option<JunkPredicate<T>>,
        a: impl IntoIterator<Item = T>,
        b: impl IntoIterator<Item = T>,
        options: MatcherOptions,
    ) -> Self {
        let a: Vec<T> = a.into_iter().collect();
        let b: Vec<T> = b.into_iter().collect();
        let index = SequenceIndex::build(&b, is_junk.as_deref(), options.autojunk);
        Self {
            a,
            b,
            is_junk,
            options,
            index,
            b_counts: None,
            matching_blocks: None,
            opcodes: None,
        }
    }

    /// Replace both sequences.
    pub fn set_seqs(&mut self, a: impl IntoIterator<Item = T>, b: impl IntoIterator<Item = T>) {
        self.set_seq1(a);
        self.set_seq2(b);
    }

    /// Replace sequence A. The index of B is kept.
    pub fn set_seq1(&mut self, a: impl IntoIterator<Item = T>) {
        self.a = a.into_iter().collect();
        self.matching_blocks = None;
        self.opcodes = None;
    }

    /// Replace sequence B, rebuilding its index. A no-op if `b` equals the
    /// current B.
    pub fn set_seq2(&mut self, b: impl IntoIterator<Item = T>) {
        let b: Vec<T> = b.into_iter().collect();
        if b == self.b {
            return;
        }
        self.b = b;
        self.index = SequenceIndex::build(&self.b, self.is_junk.as_deref(), self.options.autojunk);
        self.b_counts = None;
        self.matching_blocks = None;
        self.opcodes = None;
    }

    /// Longest matching block in `a[a_low..a_high]` and `b[b_low..b_high]`.
    ///
    /// Among blocks of maximal length the one starting earliest in A wins,
    /// then the one starting earliest in B. The block is then grown through
    /// adjacent junk and popular elements that happen to be equal. When
    /// nothing can anchor a match the result is `(a_low, b_low, 0)`.
    pub fn find_longest_match(&self, a_low: usize, a_high: usize, b_low: usize, b_high: usize) -> Result<Match> {
        MatchError::check_range(Side::A, a_low, a_high, self.a.len())?;
        MatchError::check_range(Side::B, b_low, b_high, self.b.len())?;
        let window = Window::new(a_low, a_high, b_low, b_high);
        Ok(Searcher::new(self.options.strategy).longest_match(&self.a, &self.b, &self.index, window))
    }

    /// Ordered, non-overlapping matching blocks, terminated by the sentinel
    /// `(a.len(), b.len(), 0)`.
    pub fn get_matching_blocks(&mut self) -> &[Match] {
        self.matching_blocks
            .get_or_insert_with(|| blocks::matching_blocks(&self.a, &self.b, &self.index, self.options.strategy))
    }

    /// Edit script turning A into B.
    pub fn get_opcodes(&mut self) -> &[Opcode] {
        if self.opcodes.is_none() {
            let codes = opcodes::from_blocks(self.get_matching_blocks());
            self.opcodes = Some(codes);
        }
        self.opcodes.as_deref().unwrap_or_default()
    }

    /// Opcodes split into hunks with at most `context` equal elements of
    /// context on each side.
    pub fn get_grouped_opcodes(&mut self, context: usize) -> Vec<Vec<Opcode>> {
        opcodes::group(self.get_opcodes(), context)
    }

    /// Exact similarity: `2 * matched / (len(a) + len(b))`.
    pub fn ratio(&mut self) -> f64 {
        let (len_a, len_b) = (self.a.len(), self.b.len());
        ratio::from_blocks(self.get_matching_blocks(), len_a, len_b)
    }

    /// Upper bound on [`ratio`](Self::ratio) from element counts alone.
    pub fn quick_ratio(&mut self) -> f64 {
        let counts = self.b_counts.get_or_insert_with(|| ratio::element_counts(&self.b));
        ratio::quick(&self.a, counts, self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        ratio::real_quick(self.a.len(), self.b.len())
    }

    /// Number of elements outside the matching blocks, counting each gap
    /// as the larger of its two sides.
    pub fn changed_count(&mut self) -> usize {
        let (mut i, mut j, mut changed) = (0, 0, 0);
        for m in self.get_matching_blocks() {
            changed += (m.a - i).max(m.b - j);
            i = m.a_end();
            j = m.b_end();
        }
        changed
    }

    pub fn a(&self) -> &[T] {
        &self.a
    }

    pub fn b(&self) -> &[T] {
        &self.b
    }

    pub fn options(&self) -> MatcherOptions {
        self.options
    }

    /// Elements of B the junk predicate rejected.
    pub fn junk(&self) -> &FxHashSet<T> {
        self.index.junk()
    }

    /// Elements of B the autojunk heuristic rejected.
    pub fn popular(&self) -> &FxHashSet<T> {
        self.index.popular()
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceMatcher")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("has_junk", &self.is_junk.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
