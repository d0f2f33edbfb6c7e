//! Foundation utilities for the seqdiff sequence matcher.
//!
//! Line splitting over raw bytes, the stock junk predicates, input loading,
//! and a seeded generator of similar line streams for benchmarking.

pub mod error;
pub mod junk;
pub mod lines;
pub mod streams;

// Re-export core types at crate root for convenience
pub use bstr::{BStr, BString, ByteSlice};
pub use error::UtilError;

pub type Result<T> = std::result::Result<T, UtilError>;
