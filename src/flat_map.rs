use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers where the second depends on
/// the value produced by the first
///
/// Runs `parser`, passes its output to `binder` to obtain the next parser, and
/// runs that from where the first one stopped. If either stage fails the whole
/// node fails, and since a failure returns no cursor, everything the first
/// stage consumed is discarded along with it. An enclosing [`or`](crate::or())
/// can therefore retry an alternative from the exact position this node
/// started at.
///
/// Example:
/// ```
/// use scalarcomb::{FlatMapExt, MapExt, Parser};
/// use scalarcomb::scalar::{literal, non_negative};
///
/// // A length-prefixed run of 'x's, e.g. "3:xxx"
/// let parser = non_negative().flat_map(|count| {
///     literal(":").flat_map(move |()| literal("x".repeat(count as usize)).map(move |()| count))
/// });
///
/// assert_eq!(parser.run("3:xxx"), Some(3));
/// assert_eq!(parser.run("3:xx"), None);
/// ```
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, after_first) = self.parser.parse(cursor)?;
        let next = (self.binder)(value);
        next.parse(after_first)
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, Q>(parser: P, binder: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    FlatMap::new(parser, binder)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, Q>(self, binder: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        FlatMap::new(self, binder)
    }
}

/// Implement FlatMapExt for all parsers
impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}
