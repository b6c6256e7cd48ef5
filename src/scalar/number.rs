use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Parser for a run of ASCII decimal digits
pub struct NonNegative;

impl<'code> Parser<'code> for NonNegative {
    type Output = u64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut value: u64 = 0;
        let mut current = cursor;

        while let Some(digit) = current.value().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or(NoMatch)?;
            current = current.next();
        }

        if current.position() == cursor.position() {
            return Err(NoMatch);
        }
        Ok((value, current))
    }
}

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// Takes the longest run of digits. Fails without consuming anything when the
/// input does not start with a digit or when the run does not fit in a `u64`.
pub fn non_negative() -> NonNegative {
    NonNegative
}
