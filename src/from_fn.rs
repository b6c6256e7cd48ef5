use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser built directly from an attempt closure
pub struct FromFn<F> {
    attempt: F,
}

impl<F> FromFn<F> {
    pub fn new(attempt: F) -> Self {
        FromFn { attempt }
    }
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.attempt)(cursor)
    }
}

/// Create a parser from a closure taking the current cursor
///
/// The closure returns the value and the cursor it advanced to, or
/// [`NoMatch`](crate::NoMatch). Because the closure receives its own copy of the
/// cursor, returning `NoMatch` can never leave the caller partially advanced.
pub fn from_fn<'code, F, T>(attempt: F) -> FromFn<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    FromFn::new(attempt)
}
