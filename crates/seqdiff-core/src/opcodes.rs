//! Edit scripts derived from matching blocks.

use crate::{Match, Opcode, Tag};

/// Default number of context elements around each group of changes.
pub const DEFAULT_CONTEXT: usize = 3;

/// Convert a sentinel-terminated block list into opcodes covering both
/// sequences exactly once, in order.
pub fn from_blocks(blocks: &[Match]) -> Vec<Opcode> {
    let mut codes = Vec::with_capacity(blocks.len() * 2);
    let (mut i, mut j) = (0, 0);
    for m in blocks {
        let tag = match (i < m.a, j < m.b) {
            (true, true) => Some(Tag::Replace),
            (true, false) => Some(Tag::Delete),
            (false, true) => Some(Tag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            codes.push(Opcode::new(tag, i, m.a, j, m.b));
        }
        i = m.a_end();
        j = m.b_end();
        if m.size > 0 {
            codes.push(Opcode::new(Tag::Equal, m.a, i, m.b, j));
        }
    }
    codes
}

/// Split opcodes into hunks, each carrying at most `context` equal elements
/// before and after its changes.
///
/// Long equal stretches between changes are cut, ending one group and
/// starting the next. A comparison with no changes yields no groups.
pub fn group(codes: &[Opcode], context: usize) -> Vec<Vec<Opcode>> {
    let mut codes = if codes.is_empty() {
        vec![Opcode::new(Tag::Equal, 0, 1, 0, 1)]
    } else {
        codes.to_vec()
    };

    // Trim the leading and trailing equal runs down to the context size.
    if let Some(first) = codes.first_mut().filter(|c| c.tag == Tag::Equal) {
        first.a_start = first.a_start.max(first.a_end.saturating_sub(context));
        first.b_start = first.b_start.max(first.b_end.saturating_sub(context));
    }
    if let Some(last) = codes.last_mut().filter(|c| c.tag == Tag::Equal) {
        last.a_end = last.a_end.min(last.a_start + context);
        last.b_end = last.b_end.min(last.b_start + context);
    }

    let span = context * 2;
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for code in codes {
        let mut code = code;
        if code.tag == Tag::Equal && code.a_len() > span {
            current.push(Opcode::new(
                Tag::Equal,
                code.a_start,
                code.a_end.min(code.a_start + context),
                code.b_start,
                code.b_end.min(code.b_start + context),
            ));
            groups.push(std::mem::take(&mut current));
            code.a_start = code.a_start.max(code.a_end.saturating_sub(context));
            code.b_start = code.b_start.max(code.b_end.saturating_sub(context));
        }
        current.push(code);
    }
    if !(current.is_empty() || current.len() == 1 && current[0].tag == Tag::Equal) {
        groups.push(current);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcodes_for_qabxcd_abycdf() {
        let blocks = [Match::new(1, 0, 2), Match::new(4, 3, 2), Match::new(6, 6, 0)];
        assert_eq!(
            from_blocks(&blocks),
            vec![
                Opcode::new(Tag::Delete, 0, 1, 0, 0),
                Opcode::new(Tag::Equal, 1, 3, 0, 2),
                Opcode::new(Tag::Replace, 3, 4, 2, 3),
                Opcode::new(Tag::Equal, 4, 6, 3, 5),
                Opcode::new(Tag::Insert, 6, 6, 5, 6),
            ]
        );
    }

    #[test]
    fn identical_sequences_single_equal() {
        let blocks = [Match::new(0, 0, 4), Match::new(4, 4, 0)];
        assert_eq!(from_blocks(&blocks), vec![Opcode::new(Tag::Equal, 0, 4, 0, 4)]);
    }

    #[test]
    fn empty_sequences_no_opcodes() {
        assert!(from_blocks(&[Match::new(0, 0, 0)]).is_empty());
    }

    #[test]
    fn group_without_changes_is_empty() {
        let codes = [Opcode::new(Tag::Equal, 0, 40, 0, 40)];
        assert!(group(&codes, 3).is_empty());
        assert!(group(&[], 3).is_empty());
    }

    #[test]
    fn group_splits_long_equal_runs() {
        let codes = [
            Opcode::new(Tag::Equal, 0, 10, 0, 10),
            Opcode::new(Tag::Replace, 10, 11, 10, 11),
            Opcode::new(Tag::Equal, 11, 30, 11, 30),
            Opcode::new(Tag::Delete, 30, 31, 30, 30),
            Opcode::new(Tag::Equal, 31, 40, 30, 39),
        ];
        let groups = group(&codes, 3);
        assert_eq!(
            groups,
            vec![
                vec![
                    Opcode::new(Tag::Equal, 7, 10, 7, 10),
                    Opcode::new(Tag::Replace, 10, 11, 10, 11),
                    Opcode::new(Tag::Equal, 11, 14, 11, 14),
                ],
                vec![
                    Opcode::new(Tag::Equal, 27, 30, 27, 30),
                    Opcode::new(Tag::Delete, 30, 31, 30, 30),
                    Opcode::new(Tag::Equal, 31, 34, 30, 33),
                ],
            ]
        );
    }

    #[test]
    fn group_keeps_short_equal_runs_inside() {
        let codes = [
            Opcode::new(Tag::Insert, 0, 0, 0, 1),
            Opcode::new(Tag::Equal, 0, 6, 1, 7),
            Opcode::new(Tag::Delete, 6, 7, 7, 7),
        ];
        let groups = group(&codes, 3);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn group_with_zero_context() {
        let codes = [
            Opcode::new(Tag::Equal, 0, 5, 0, 5),
            Opcode::new(Tag::Insert, 5, 5, 5, 6),
            Opcode::new(Tag::Equal, 5, 9, 6, 10),
        ];
        let groups = group(&codes, 0);
        assert_eq!(
            groups,
            vec![vec![
                Opcode::new(Tag::Equal, 5, 5, 5, 5),
                Opcode::new(Tag::Insert, 5, 5, 5, 6),
                Opcode::new(Tag::Equal, 5, 5, 6, 6),
            ]]
        );
    }
}
