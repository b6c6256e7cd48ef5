use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;
use std::sync::OnceLock;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// The factory runs once, on the first parse; later parses reuse the parser it
/// built. Construction of a recursive grammar therefore stops at each `Lazy`
/// node and only goes as deep as some input actually drives it.
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceLock<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceLock::new(),
        }
    }

    fn get(&self) -> &P {
        self.parser.get_or_init(&self.factory)
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.get().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
{
    Lazy::new(factory)
}
