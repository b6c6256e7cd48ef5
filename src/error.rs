use crate::cursor::Cursor;
use thiserror::Error;

/// The one way a parser can fail: nothing matched at the given cursor
///
/// Carries no position or message. Parsers that need to tell failures apart do
/// so by which sub-parser failed, not by inspecting this value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Error)]
#[error("no match")]
pub struct NoMatch;

/// Result of a single parse attempt: the value and the advanced cursor
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), NoMatch>;

/// Returned by [`Parsable::try_from_literal`](crate::Parsable::try_from_literal)
/// when the text is not a complete match for the target type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{literal}` is not a valid {type_name}")]
pub struct LiteralError {
    pub literal: String,
    pub type_name: &'static str,
}
