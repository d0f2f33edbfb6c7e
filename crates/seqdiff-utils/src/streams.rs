//! Seeded generation of two similar line streams.
//!
//! Used by the benchmark driver and the criterion benches to exercise the
//! matcher on realistic "file with a few hundred edited lines" inputs
//! without shipping fixture files.

use bstr::BString;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Result, UtilError};

/// Printable ASCII range lines are drawn from (space through `}`).
const LINE_CHARS: std::ops::Range<u8> = 32..126;

/// Characters per generated line, excluding the terminator.
pub const LINE_WIDTH: usize = 60;

/// Seed the driver uses when none is given.
pub const DEFAULT_SEED: u64 = 1234;

/// A pair of line streams where `modified` is `original` with some lines
/// replaced by fresh random content.
#[derive(Debug, Clone)]
pub struct SimilarStreams {
    pub original: Vec<BString>,
    pub modified: Vec<BString>,
}

impl SimilarStreams {
    /// Generate `lines` random lines, then overwrite `diffs` randomly chosen
    /// rows of a copy. The same row may be picked twice, so the number of
    /// differing rows is at most `diffs`.
    pub fn generate(lines: usize, diffs: usize, seed: u64) -> Result<Self> {
        if lines == 0 && diffs > 0 {
            return Err(UtilError::StreamShape(format!(
                "cannot change {diffs} lines of an empty stream"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let original: Vec<BString> = (0..lines).map(|_| random_line(&mut rng)).collect();
        let mut modified = original.clone();
        for _ in 0..diffs {
            let row = rng.gen_range(0..lines);
            modified[row] = random_line(&mut rng);
        }

        Ok(Self { original, modified })
    }
}

fn random_line(rng: &mut StdRng) -> BString {
    let mut line: Vec<u8> = (0..LINE_WIDTH).map(|_| rng.gen_range(LINE_CHARS)).collect();
    line.push(b'\n');
    BString::from(line)
}
