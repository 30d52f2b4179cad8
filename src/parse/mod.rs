mod grammar;

use winnow::stream::LocatingSlice;
use winnow::Parser;

use crate::{LabelError, Structural, Token};

use grammar::Piece;

/// Scan an expression into its operand tokens, left to right.
///
/// A token is a maximal run of non-structural characters whose neighbours
/// are structural characters (`&`, `|`, `(`, `)`) or string boundaries.
/// Offsets are byte offsets into `expr`. Never fails: malformed input just
/// yields fewer tokens.
///
/// ```
/// use tagexpr::{tokenize, Structural};
///
/// let tokens = tokenize("a&(bc|d)");
/// assert_eq!(tokens[1].text, "bc");
/// assert_eq!((tokens[1].begin, tokens[1].end), (3, 5));
/// assert_eq!(tokens[1].prev, Some(Structural::Open));
/// assert_eq!(tokens[1].next, Some(Structural::Or));
/// ```
#[must_use]
pub fn tokenize(expr: &str) -> Vec<Token> {
    // `pieces` accepts every input; an error here would mean nothing to scan.
    let pieces = grammar::pieces
        .parse(LocatingSlice::new(expr))
        .unwrap_or_default();

    let mut tokens = Vec::new();
    for (i, piece) in pieces.iter().enumerate() {
        let Piece::Run(text, span) = piece else {
            continue;
        };
        let before = i.checked_sub(1).and_then(|j| pieces.get(j));
        let after = pieces.get(i + 1);
        if let (Some(prev), Some(next)) = (boundary(before), boundary(after)) {
            tokens.push(Token {
                text: (*text).to_owned(),
                begin: span.start,
                end: span.end,
                prev,
                next,
            });
        }
    }
    tokens
}

/// Same as [`tokenize()`].
#[must_use]
pub fn split_string(expr: &str) -> Vec<Token> {
    tokenize(expr)
}

/// `Some(side)` when a run may end against `piece`: a structural character or
/// the edge of the string. Another run means the candidate is not maximal.
fn boundary(piece: Option<&Piece<'_>>) -> Option<Option<Structural>> {
    match piece {
        None => Some(None),
        Some(Piece::Structural(s)) => Some(Some(*s)),
        Some(Piece::Run(..)) => None,
    }
}

/// Strict label check backing [`Label::from_str`](crate::Label).
pub(crate) fn label(input: &str) -> Result<&str, LabelError> {
    if input.is_empty() {
        return Err(LabelError::Empty);
    }
    let mut rest = input;
    let run = grammar::label_run(&mut rest).unwrap_or_default();
    match rest.chars().next() {
        None => Ok(run),
        Some(ch) => Err(LabelError::InvalidChar {
            ch,
            index: run.len(),
        }),
    }
}
