//! Sequence matching engine.
//!
//! Finds the longest contiguous runs common to two sequences of hashable
//! elements, assembles them into an ordered cover of matching blocks, and
//! derives edit scripts (opcodes), similarity ratios, and unified/context
//! diff text from that cover.
//!
//! The entry point is [`SequenceMatcher`]:
//!
//! ```
//! use seqdiff_core::{Match, SequenceMatcher};
//!
//! let mut m = SequenceMatcher::new("abcd".chars(), "bcde".chars());
//! assert_eq!(m.get_matching_blocks(), &[Match::new(1, 0, 3), Match::new(4, 4, 0)]);
//! assert_eq!(m.ratio(), 0.75);
//! ```

mod blocks;
pub mod close;
mod error;
pub mod format;
mod index;
mod matcher;
pub mod opcodes;
pub mod ratio;
mod search;

use serde::Serialize;

pub use close::get_close_matches;
pub use error::{MatchError, Side};
pub use index::SequenceIndex;
pub use matcher::{JunkPredicate, SequenceMatcher};
pub use search::SearchStrategy;

pub type Result<T> = std::result::Result<T, MatchError>;

/// Length of B from which the autojunk heuristic applies.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// A run of `size` equal elements starting at `a` in sequence A and `b` in
/// sequence B.
///
/// Ordering is by `a`, then `b`, then `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl Match {
    pub const fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }

    /// One past the last matched index in A.
    pub const fn a_end(&self) -> usize {
        self.a + self.size
    }

    /// One past the last matched index in B.
    pub const fn b_end(&self) -> usize {
        self.b + self.size
    }
}

/// Kind of an edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// `a[a_start..a_end] == b[b_start..b_end]`.
    Equal,
    /// `a[a_start..a_end]` should be deleted; `b_start == b_end`.
    Delete,
    /// `b[b_start..b_end]` should be inserted at `a_start`; `a_start == a_end`.
    Insert,
    /// `a[a_start..a_end]` should be replaced by `b[b_start..b_end]`.
    Replace,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Equal => "equal",
            Tag::Delete => "delete",
            Tag::Insert => "insert",
            Tag::Replace => "replace",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edit operation over the half-open ranges `a_start..a_end` and
/// `b_start..b_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Opcode {
    pub tag: Tag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    pub const fn new(tag: Tag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            tag,
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    /// Number of elements of A covered.
    pub const fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    /// Number of elements of B covered.
    pub const fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }
}

/// Options controlling matcher behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Treat elements occurring in more than 1% of a long B as popular.
    pub autojunk: bool,
    /// Inner loop used by the longest-match search.
    pub strategy: SearchStrategy,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            autojunk: true,
            strategy: SearchStrategy::Arena,
        }
    }
}

impl MatcherOptions {
    pub fn autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
