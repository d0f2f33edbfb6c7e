use std::fmt;

/// Which of the two compared sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("a"),
            Side::B => f.write_str("b"),
        }
    }
}

/// Errors produced by the matching engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error("invalid range on sequence {side}: {low}..{high} with length {len}")]
    InvalidRange {
        side: Side,
        low: usize,
        high: usize,
        len: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl MatchError {
    /// Check `low <= high <= len`.
    pub(crate) fn check_range(side: Side, low: usize, high: usize, len: usize) -> Result<(), Self> {
        if low <= high && high <= len {
            Ok(())
        } else {
            Err(MatchError::InvalidRange {
                side,
                low,
                high,
                len,
            })
        }
    }
}
