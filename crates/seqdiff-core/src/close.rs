//! Picking the best "close enough" candidates for a word.

use std::cmp::Ordering;

use crate::{MatchError, Result, SequenceMatcher};

/// Default number of candidates returned.
pub const DEFAULT_COUNT: usize = 3;

/// Default minimum ratio a candidate needs.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Up to `n` of `possibilities` whose similarity to `word` is at least
/// `cutoff`, best first. Equal scores are ordered by candidate, descending.
///
/// The word is indexed once; each candidate is screened by the two cheap
/// upper bounds before the exact ratio is computed.
///
/// ```
/// use seqdiff_core::get_close_matches;
///
/// let words = ["ape", "apple", "peach", "puppy"];
/// let close = get_close_matches("appel", words, 3, 0.6).unwrap();
/// assert_eq!(close, vec!["apple", "ape"]);
/// ```
pub fn get_close_matches<'a, I>(word: &str, possibilities: I, n: usize, cutoff: f64) -> Result<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    if n == 0 {
        return Err(MatchError::InvalidArgument(format!("n must be > 0: {n}")));
    }
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(MatchError::InvalidArgument(format!(
            "cutoff must be in [0.0, 1.0]: {cutoff}"
        )));
    }

    let mut matcher = SequenceMatcher::new(std::iter::empty(), word.chars());
    let mut scored: Vec<(f64, &'a str)> = Vec::new();
    for candidate in possibilities {
        matcher.set_seq1(candidate.chars());
        if matcher.real_quick_ratio() >= cutoff && matcher.quick_ratio() >= cutoff {
            let score = matcher.ratio();
            if score >= cutoff {
                scored.push((score, candidate));
            }
        }
    }

    scored.sort_by(|x, y| {
        y.0.partial_cmp(&x.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| y.1.cmp(x.1))
    });
    scored.truncate(n);
    Ok(scored.into_iter().map(|(_, candidate)| candidate).collect())
}
