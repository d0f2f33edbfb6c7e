//! Unified diff format output.
//!
//! Produces `---`/`+++` headers, `@@ -a,b +c,d @@` hunk headers, and
//! context/addition/deletion lines.

use std::hash::Hash;

use crate::{Opcode, SequenceMatcher, Tag};

use super::{file_label, push_line, RenderOptions};

/// Unified diff of two line sequences, matched with default options.
///
/// Lines are expected to carry their own terminators; a final line without
/// one is flagged with `\ No newline at end of file`. Identical inputs give
/// an empty string.
pub fn unified_diff<L: AsRef<[u8]>>(a: &[L], b: &[L], options: &RenderOptions) -> String {
    let mut matcher = SequenceMatcher::new(a.iter().map(|line| line.as_ref()), b.iter().map(|line| line.as_ref()));
    let groups = matcher.get_grouped_opcodes(options.context);
    render_unified(a, b, &groups, options)
}

/// Render already grouped opcodes in unified format.
pub fn render_unified<L: AsRef<[u8]>>(a: &[L], b: &[L], groups: &[Vec<Opcode>], options: &RenderOptions) -> String {
    let mut out = String::new();
    if groups.is_empty() {
        return out;
    }

    out.push_str(&format!(
        "--- {}\n",
        file_label(&options.from_file, options.from_date.as_deref())
    ));
    out.push_str(&format!(
        "+++ {}\n",
        file_label(&options.to_file, options.to_date.as_deref())
    ));

    for group in groups {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        out.push_str(&format!(
            "@@ -{} +{} @@\n",
            format_range(first.a_start, last.a_end),
            format_range(first.b_start, last.b_end)
        ));
        for code in group {
            if code.tag == Tag::Equal {
                for line in &a[code.a_start..code.a_end] {
                    push_line(&mut out, " ", line.as_ref());
                }
                continue;
            }
            if matches!(code.tag, Tag::Replace | Tag::Delete) {
                for line in &a[code.a_start..code.a_end] {
                    push_line(&mut out, "-", line.as_ref());
                }
            }
            if matches!(code.tag, Tag::Replace | Tag::Insert) {
                for line in &b[code.b_start..code.b_end] {
                    push_line(&mut out, "+", line.as_ref());
                }
            }
        }
    }
    out
}

/// Hunk range `start,len` with a 1-based start. A one-line range is just
/// the start; an empty range names the line before it.
pub fn format_range(start: usize, stop: usize) -> String {
    let len = stop - start;
    let beginning = start + 1;
    match len {
        1 => format!("{beginning}"),
        0 => format!("{},0", beginning - 1),
        _ => format!("{beginning},{len}"),
    }
}

/// Unified diff of two slices of any hashable elements, rendering each
/// element with `Debug`. Useful for token streams that are not text lines.
pub fn unified_debug<T: Eq + Hash + Clone + std::fmt::Debug>(a: &[T], b: &[T], options: &RenderOptions) -> String {
    let render = |items: &[T]| -> Vec<String> { items.iter().map(|x| format!("{x:?}\n")).collect() };
    let mut matcher = SequenceMatcher::new(a.iter().cloned(), b.iter().cloned());
    let groups = matcher.get_grouped_opcodes(options.context);
    render_unified(&render(a), &render(b), &groups, options)
}
