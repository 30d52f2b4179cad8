use std::collections::HashMap;

use log::trace;

use crate::parse::tokenize;
use crate::{Operator, Structural};

/// Append `label` to `expr`, joined with `&`.
///
/// An empty expression becomes `label`; an expression that already mentions
/// `label` is returned unchanged.
#[must_use]
pub fn append(expr: &str, label: &str) -> String {
    append_with(expr, label, Operator::And)
}

/// [`append()`] with an explicit join operator.
#[must_use]
pub fn append_with(expr: &str, label: &str, op: Operator) -> String {
    if expr.is_empty() {
        return label.to_owned();
    }
    let present = expr
        .split(|c: char| Structural::from_char(c).is_some())
        .any(|piece| !piece.is_empty() && piece == label);
    if present {
        expr.to_owned()
    } else {
        format!("{expr}{op}{label}")
    }
}

/// Delete every occurrence of `label`, taking one adjacent structural
/// character with each so no operator is left dangling.
///
/// The side with the higher priority is consumed (`&`/`|` over parentheses
/// over the string edge); on a tie the preceding character goes.
///
/// ```
/// use tagexpr::delete_label;
///
/// assert_eq!(delete_label("a&b", "a"), "b");
/// assert_eq!(delete_label("a&(b|c)", "b"), "a&(c)");
/// ```
#[must_use]
pub fn delete_label(expr: &str, label: &str) -> String {
    if expr.is_empty() || expr == label {
        return String::new();
    }
    let mut out = expr.to_owned();
    // Right to left: splicing never moves the offsets of earlier tokens.
    for token in tokenize(expr).iter().rev().filter(|t| t.text == label) {
        let (begin, end) = if token.prev_priority() < token.next_priority() {
            (Some(token.begin), token.end + 1)
        } else {
            (token.begin.checked_sub(1), token.end)
        };
        if let Some(begin) = begin {
            splice(&mut out, begin, end, "");
        }
    }
    out
}

/// Rename operands according to `mapping` (old label -> new label).
///
/// Renames are simultaneous: every token is looked up in the input
/// expression exactly once, so `{a: b, b: a}` swaps the two. Tokens without
/// an entry are left as they are.
#[must_use]
pub fn rename_all<S: std::hash::BuildHasher>(
    expr: &str,
    mapping: &HashMap<String, String, S>,
) -> String {
    let mut out = expr.to_owned();
    for token in tokenize(expr).iter().rev() {
        if let Some(new) = mapping.get(&token.text) {
            splice(&mut out, token.begin, token.end, new);
        }
    }
    out
}

/// Replace `begin..end` of `s` with `with`. A `begin` outside the string is a
/// no-op and `end` is clamped to the string's length.
fn splice(s: &mut String, begin: usize, end: usize, with: &str) {
    if begin >= s.len() {
        return;
    }
    let end = end.clamp(begin, s.len());
    if !s.is_char_boundary(begin) || !s.is_char_boundary(end) {
        return;
    }
    trace!("splice {begin}..{end} of {s:?} with {with:?}");
    s.replace_range(begin..end, with);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn append_to_empty() {
        assert_eq!(append("", "a"), "a");
    }

    #[test]
    fn append_joins_with_and() {
        assert_eq!(append("a", "b"), "a&b");
        assert_eq!(append("(a|b)", "c"), "(a|b)&c");
    }

    #[test]
    fn append_is_idempotent() {
        assert_eq!(append(&append("", "a"), "a"), "a");
        assert_eq!(append("(a|b)&c", "b"), "(a|b)&c");
    }

    #[test]
    fn append_matches_whole_labels_only() {
        assert_eq!(append("ab", "a"), "ab&a");
        assert_eq!(append("a", "ab"), "a&ab");
    }

    #[test]
    fn append_with_or() {
        assert_eq!(append_with("a&b", "c", Operator::Or), "a&b|c");
        assert_eq!(append_with("", "c", Operator::Or), "c");
    }

    #[test]
    fn delete_only_operand() {
        assert_eq!(delete_label("a", "a"), "");
        assert_eq!(delete_label("", "a"), "");
    }

    #[test]
    fn delete_from_conjunction() {
        assert_eq!(delete_label("a&b", "b"), "a");
        assert_eq!(delete_label("a&b", "a"), "b");
        assert_eq!(delete_label("a&b&c", "b"), "a&c");
    }

    #[test]
    fn delete_prefers_preceding_on_tie() {
        // `b` sits between `&` and `|`: equal priority, so `&` goes.
        assert_eq!(delete_label("a&b|c", "b"), "a|c");
    }

    #[test]
    fn delete_inside_parens() {
        // After `(`: the following operator outranks the paren.
        assert_eq!(delete_label("(a|b)&c", "a"), "(b)&c");
        // Before `)`: the preceding operator outranks the paren.
        assert_eq!(delete_label("(a|b)&c", "b"), "(a)&c");
        // Alone in parens: tie between `(` and `)`, the `(` goes.
        assert_eq!(delete_label("a&(b)", "b"), "a&)");
    }

    #[test]
    fn delete_every_occurrence() {
        assert_eq!(delete_label("a&b|a", "a"), "b");
        assert_eq!(delete_label("a&a", "a"), "");
    }

    #[test]
    fn delete_absent_label_is_noop() {
        assert_eq!(delete_label("a&b", "c"), "a&b");
        assert_eq!(delete_label("ab&b", "a"), "ab&b");
    }

    #[test]
    fn rename_maps_tokens() {
        assert_eq!(rename_all("a&b", &map(&[("a", "x"), ("b", "y")])), "x&y");
    }

    #[test]
    fn rename_passes_unmapped_through() {
        assert_eq!(rename_all("a&c", &map(&[("a", "x")])), "x&c");
    }

    #[test]
    fn rename_is_simultaneous() {
        assert_eq!(rename_all("a|(b&a)", &map(&[("a", "b"), ("b", "a")])), "b|(a&b)");
    }

    #[test]
    fn rename_changes_lengths() {
        assert_eq!(
            rename_all("z&(aa|ab)", &map(&[("aa", "z"), ("ab", "aa"), ("z", "y")])),
            "y&(z|aa)"
        );
    }

    #[test]
    fn splice_guards() {
        let mut s = "abc".to_owned();
        splice(&mut s, 3, 4, "x");
        assert_eq!(s, "abc");
        splice(&mut s, 1, 10, "");
        assert_eq!(s, "a");
    }
}
