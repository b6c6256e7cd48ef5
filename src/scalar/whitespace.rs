use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser that skips any run of whitespace
pub struct Whitespace;

impl<'code> Parser<'code> for Whitespace {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut cursor = cursor;
        while cursor.value().is_some_and(char::is_whitespace) {
            cursor = cursor.next();
        }
        Ok(((), cursor))
    }
}

/// Parser that consumes the longest leading run of Unicode whitespace
///
/// Always succeeds, including when there is no whitespace to skip.
pub fn whitespace() -> Whitespace {
    Whitespace
}
