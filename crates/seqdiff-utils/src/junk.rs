//! Stock junk predicates for line and character sequences.

use std::sync::OnceLock;

use regex::bytes::Regex;

/// Whitespace, optionally one `#`, more whitespace, end of line.
fn line_junk_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*(?:#\s*)?$").expect("constant pattern compiles"))
}

/// True for lines that carry no content: blank, or a lone `#`.
///
/// ```
/// use seqdiff_utils::junk::is_line_junk;
/// assert!(is_line_junk(b"\n"));
/// assert!(is_line_junk(b"  #   \n"));
/// assert!(!is_line_junk(b"hello\n"));
/// assert!(!is_line_junk(b"#comment\n"));
/// ```
pub fn is_line_junk(line: &[u8]) -> bool {
    line_junk_pattern().is_match(line)
}

/// Same as [`is_line_junk`] but for text lines.
pub fn is_str_line_junk(line: &str) -> bool {
    is_line_junk(line.as_bytes())
}

/// True for the characters that carry no content in character-level diffs.
pub fn is_character_junk(ch: &char) -> bool {
    matches!(ch, ' ' | '\t')
}

/// Byte flavor of [`is_character_junk`].
pub fn is_byte_junk(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t')
}
