//! Diff text rendering: unified and context formats.

pub mod context;
pub mod unified;

pub use context::{context_diff, render_context};
pub use unified::{render_unified, unified_diff};

use bstr::ByteSlice;

use crate::opcodes::DEFAULT_CONTEXT;

/// Options controlling diff rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Label of the old side in the file header.
    pub from_file: String,
    /// Label of the new side in the file header.
    pub to_file: String,
    /// Optional timestamp appended to the old label after a tab.
    pub from_date: Option<String>,
    /// Optional timestamp appended to the new label after a tab.
    pub to_date: Option<String>,
    /// Number of context lines around each hunk (default 3).
    pub context: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            from_file: String::new(),
            to_file: String::new(),
            from_date: None,
            to_date: None,
            context: DEFAULT_CONTEXT,
        }
    }
}

impl RenderOptions {
    pub fn with_labels(from_file: impl Into<String>, to_file: impl Into<String>) -> Self {
        Self {
            from_file: from_file.into(),
            to_file: to_file.into(),
            ..Self::default()
        }
    }
}

/// `label` or `label\tdate`.
fn file_label(name: &str, date: Option<&str>) -> String {
    match date {
        Some(date) if !date.is_empty() => format!("{name}\t{date}"),
        _ => name.to_string(),
    }
}

/// Append one body line with its prefix.
fn push_line(out: &mut String, prefix: &str, line: &[u8]) {
    out.push_str(prefix);
    out.push_str(&line.to_str_lossy());
    ensure_newline(out);
}

/// Ensure the output ends with a newline.
fn ensure_newline(out: &mut String) {
    if !out.ends_with('\n') {
        out.push_str("\n\\ No newline at end of file\n");
    }
}
