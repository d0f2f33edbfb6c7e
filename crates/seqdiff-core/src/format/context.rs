//! Context diff format output.
//!
//! Produces `***`/`---` headers, `***************` hunk separators, and
//! separate old and new sections marked with `! `, `- `, `+ ` and `  `.

use crate::{Opcode, SequenceMatcher, Tag};

use super::{file_label, push_line, RenderOptions};

/// Context diff of two line sequences, matched with default options.
pub fn context_diff<L: AsRef<[u8]>>(a: &[L], b: &[L], options: &RenderOptions) -> String {
    let mut matcher = SequenceMatcher::new(a.iter().map(|line| line.as_ref()), b.iter().map(|line| line.as_ref()));
    let groups = matcher.get_grouped_opcodes(options.context);
    render_context(a, b, &groups, options)
}

/// Render already grouped opcodes in context format.
pub fn render_context<L: AsRef<[u8]>>(a: &[L], b: &[L], groups: &[Vec<Opcode>], options: &RenderOptions) -> String {
    let mut out = String::new();
    if groups.is_empty() {
        return out;
    }

    out.push_str(&format!(
        "*** {}\n",
        file_label(&options.from_file, options.from_date.as_deref())
    ));
    out.push_str(&format!(
        "--- {}\n",
        file_label(&options.to_file, options.to_date.as_deref())
    ));

    for group in groups {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        out.push_str("***************\n");

        out.push_str(&format!("*** {} ****\n", format_range(first.a_start, last.a_end)));
        if group.iter().any(|c| matches!(c.tag, Tag::Replace | Tag::Delete)) {
            for code in group.iter().filter(|c| c.tag != Tag::Insert) {
                for line in &a[code.a_start..code.a_end] {
                    push_line(&mut out, prefix(code.tag), line.as_ref());
                }
            }
        }

        out.push_str(&format!("--- {} ----\n", format_range(first.b_start, last.b_end)));
        if group.iter().any(|c| matches!(c.tag, Tag::Replace | Tag::Insert)) {
            for code in group.iter().filter(|c| c.tag != Tag::Delete) {
                for line in &b[code.b_start..code.b_end] {
                    push_line(&mut out, prefix(code.tag), line.as_ref());
                }
            }
        }
    }
    out
}

fn prefix(tag: Tag) -> &'static str {
    match tag {
        Tag::Equal => "  ",
        Tag::Delete => "- ",
        Tag::Insert => "+ ",
        Tag::Replace => "! ",
    }
}

/// Hunk range `first,last` with 1-based line numbers. A one-line range is
/// just the line; an empty range names the line before it.
pub fn format_range(start: usize, stop: usize) -> String {
    let len = stop - start;
    let beginning = if len == 0 { start } else { start + 1 };
    if len <= 1 {
        format!("{beginning}")
    } else {
        format!("{},{}", beginning, beginning + len - 1)
    }
}
