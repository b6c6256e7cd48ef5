use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact piece of text
pub struct Literal {
    expected: Cow<'static, str>,
    scalars: usize,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let scalars = expected.chars().count();
        Self { expected, scalars }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if !cursor.rest().starts_with(self.expected.as_ref()) {
            return Err(NoMatch);
        }
        let cursor = cursor.advance(self.scalars).ok_or(NoMatch)?;
        Ok(((), cursor))
    }
}

/// Parser that succeeds when the remaining input starts with `expected`,
/// consuming exactly that text
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
