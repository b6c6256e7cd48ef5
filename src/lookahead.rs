use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that performs positive lookahead
///
/// Succeeds with the inner parser's output if it matches at the current
/// position, fails if it does not. Never consumes any input regardless of
/// outcome: the cursor the inner parser advanced to is dropped.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'code, P> Parser<'code> for Lookahead<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, _) = self.parser.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Lookahead parser
pub fn lookahead<'code, P>(parser: P) -> Lookahead<P>
where
    P: Parser<'code>,
{
    Lookahead::new(parser)
}

/// Extension trait to add .peek() method support for parsers
pub trait LookaheadExt<'code>: Parser<'code> + Sized {
    fn peek(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }
}

/// Implement LookaheadExt for all parsers
impl<'code, P> LookaheadExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat_map::FlatMapExt;
    use crate::map::MapExt;
    use crate::scalar::{any_scalar, literal, non_negative};

    #[test]
    fn test_lookahead_match_does_not_consume() {
        let parser = lookahead(literal("hello"));

        assert_eq!(parser.run_from("hello world", 0), (Some(()), "hello world"));
    }

    #[test]
    fn test_lookahead_failure() {
        let parser = lookahead(literal("hello"));

        assert_eq!(parser.run_from("help", 0), (None, "help"));
    }

    #[test]
    fn test_lookahead_keeps_value() {
        let parser = non_negative().peek();

        assert_eq!(parser.run_from("42x", 0), (Some(42), "42x"));
    }

    #[test]
    fn test_lookahead_then_consume() {
        // Only take a scalar when a digit follows it
        let parser = any_scalar().flat_map(|c| lookahead(non_negative()).map(move |_| c));

        assert_eq!(parser.run_from("a1", 0), (Some('a'), "1"));
        assert_eq!(parser.run_from("ab", 0), (None, "ab"));
    }

    #[test]
    fn test_lookahead_at_end_of_input() {
        let parser = lookahead(any_scalar());

        assert_eq!(parser.run_from("", 0), (None, ""));
    }
}
