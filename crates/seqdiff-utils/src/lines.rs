//! Splitting byte buffers into lines and loading them from disk.

use std::fs;
use std::path::Path;

use crate::{Result, UtilError};

/// Split a byte slice into lines (preserving line endings).
pub fn split_lines(data: &[u8]) -> Vec<&[u8]> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, &byte) in data.iter().enumerate() {
        if byte == b'\n' {
            lines.push(&data[start..=i]);
            start = i + 1;
        }
    }
    // Content after the last newline is a line without a terminator
    if start < data.len() {
        lines.push(&data[start..]);
    }
    lines
}

/// Read a whole file as raw bytes, attaching the path to any I/O error.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| UtilError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// True if the line carries a `\n` terminator.
pub fn has_newline(line: &[u8]) -> bool {
    line.last() == Some(&b'\n')
}
