use std::ops::Range;

use winnow::combinator::{alt, repeat};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::stream::LocatingSlice;
use winnow::token::{any, take_while};

use crate::Structural;

pub(crate) type Input<'i> = LocatingSlice<&'i str>;

/// One lexical unit of an expression: a single structural character, or a
/// maximal run of anything else together with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece<'i> {
    Structural(Structural),
    Run(&'i str, Range<usize>),
}

// -- Structural characters --------------------------------------------------

fn structural(input: &mut Input<'_>) -> ModalResult<Structural> {
    any.verify_map(Structural::from_char).parse_next(input)
}

// -- Operand runs -----------------------------------------------------------

fn run<'i>(input: &mut Input<'i>) -> ModalResult<(&'i str, Range<usize>)> {
    take_while(1.., |c: char| Structural::from_char(c).is_none())
        .with_span()
        .parse_next(input)
}

// -- Whole expression -------------------------------------------------------

/// Every character is either structural or part of a run, so this consumes
/// any input.
pub(crate) fn pieces<'i>(input: &mut Input<'i>) -> ModalResult<Vec<Piece<'i>>> {
    repeat(
        0..,
        alt((
            structural.map(Piece::Structural),
            run.map(|(text, span)| Piece::Run(text, span)),
        )),
    )
    .parse_next(input)
}

// -- Labels -----------------------------------------------------------------

pub(crate) fn label_run<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c.is_ascii_lowercase()).parse_next(input)
}
