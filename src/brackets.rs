use log::trace;

/// Remove redundant parentheses until none are left:
///
/// 1. `(label)` becomes `label`, including the empty `()`;
/// 2. a pair wrapping the whole expression, with no parentheses inside, is
///    dropped.
///
/// Both rules are reapplied until the text stops changing. Every change
/// shortens the string, so this always terminates.
///
/// ```
/// use tagexpr::remove_brackets;
///
/// assert_eq!(remove_brackets("((a))&(b|c)"), "a&(b|c)");
/// assert_eq!(remove_brackets("(a|b)"), "a|b");
/// ```
#[must_use]
pub fn remove_brackets(expr: &str) -> String {
    let mut current = expr.to_owned();
    loop {
        let mut next = unwrap_single_labels(&current);
        if let Some(inner) = strip_outer(&next) {
            next = inner.to_owned();
        }
        if next == current {
            return current;
        }
        trace!("brackets: {current:?} -> {next:?}");
        current = next;
    }
}

/// One left-to-right pass replacing `(` + `[a-z]*` + `)` with the bare run.
/// Matches do not overlap; scanning resumes after each match.
fn unwrap_single_labels(expr: &str) -> String {
    let bytes = expr.as_bytes();
    let mut out = String::with_capacity(expr.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'(' {
            i += 1;
            continue;
        }
        let run_end = bytes[i + 1..]
            .iter()
            .position(|b| !b.is_ascii_lowercase())
            .map_or(bytes.len(), |n| i + 1 + n);
        if bytes.get(run_end) == Some(&b')') {
            out.push_str(&expr[copied..i]);
            out.push_str(&expr[i + 1..run_end]);
            copied = run_end + 1;
            i = run_end + 1;
        } else {
            i += 1;
        }
    }
    out.push_str(&expr[copied..]);
    out
}

/// The inside of `expr` when it is exactly `(` + no parentheses + `)`.
fn strip_outer(expr: &str) -> Option<&str> {
    let inner = expr.strip_prefix('(')?.strip_suffix(')')?;
    (!inner.contains(['(', ')'])).then_some(inner)
}
