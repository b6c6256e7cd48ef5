use crate::cursor::Cursor;
use crate::error::ParseResult;
use std::sync::Arc;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success, or
    /// [`NoMatch`](crate::NoMatch) on failure. A failure hands back no cursor,
    /// so the caller's copy is still at the position it passed in.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Parse starting `from` scalars into `input`, returning whatever is left
    ///
    /// Does not require the whole input to be consumed. On failure the
    /// remainder is the input from `from` onwards, untouched. An offset past
    /// the end of `input` fails without running the parser.
    fn run_from(&self, input: &'code str, from: usize) -> (Option<Self::Output>, &'code str) {
        let Some(cursor) = Cursor::at(input, from) else {
            return (None, "");
        };

        match self.parse(cursor) {
            Ok((value, cursor)) => (Some(value), cursor.rest()),
            Err(_) => (None, cursor.rest()),
        }
    }

    /// Parse the whole of `input`
    ///
    /// Succeeds only if the parser matches and nothing is left over; a match
    /// on a prefix alone is a failure.
    fn run(&self, input: &'code str) -> Option<Self::Output> {
        match self.run_from(input, 0) {
            (Some(value), "") => Some(value),
            _ => None,
        }
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}
