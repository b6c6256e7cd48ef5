use crate::error::LiteralError;
use crate::parser::Parser;
use std::any::type_name;

/// Types that can be read back from their textual form
///
/// Implementors supply [`parser`](Parsable::parser); the rest is derived from
/// it. Every provided method requires the parser to consume the whole text.
///
/// ```
/// use scalarcomb::{FlatMapExt, MapExt, Parsable, Parser};
/// use scalarcomb::scalar::{literal, non_negative};
///
/// #[derive(Debug, PartialEq)]
/// struct Ratio(u64, u64);
///
/// impl Parsable for Ratio {
///     fn parser<'code>() -> impl Parser<'code, Output = Self> {
///         non_negative().flat_map(|num| {
///             literal("/").flat_map(move |()| non_negative().map(move |den| Ratio(num, den)))
///         })
///     }
/// }
///
/// assert_eq!(Ratio::parse("3/4"), Some(Ratio(3, 4)));
/// assert_eq!(Ratio::parse("3/4 "), None);
/// assert_eq!(Ratio::from_literal("16/9"), Ratio(16, 9));
/// ```
pub trait Parsable: Sized {
    /// The parser for a complete value of this type
    fn parser<'code>() -> impl Parser<'code, Output = Self>;

    /// Parse the whole of `text`, or `None` if it is not exactly one value
    fn parse(text: &str) -> Option<Self> {
        Self::parser().run(text)
    }

    /// Like [`parse`](Parsable::parse), but reporting which text was rejected
    fn try_from_literal(text: &str) -> Result<Self, LiteralError> {
        Self::parse(text).ok_or_else(|| LiteralError {
            literal: text.to_string(),
            type_name: type_name::<Self>(),
        })
    }

    /// Build a value from text that is known to be valid, such as a constant
    /// in source code
    ///
    /// # Panics
    ///
    /// Panics if `text` does not parse completely. Use
    /// [`try_from_literal`](Parsable::try_from_literal) for text that comes
    /// from outside the program.
    #[track_caller]
    fn from_literal(text: &str) -> Self {
        match Self::try_from_literal(text) {
            Ok(value) => value,
            Err(error) => panic!("invalid literal: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat_map::FlatMapExt;
    use crate::map::MapExt;
    use crate::scalar::{literal, non_negative, whitespace};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Point {
        x: u64,
        y: u64,
    }

    impl Parsable for Point {
        fn parser<'code>() -> impl Parser<'code, Output = Self> {
            literal("(")
                .flat_map(|()| whitespace())
                .flat_map(|()| non_negative())
                .flat_map(|x| {
                    whitespace()
                        .flat_map(|()| literal(","))
                        .flat_map(|()| whitespace())
                        .flat_map(|()| non_negative())
                        .map(move |y| Point { x, y })
                })
                .flat_map(|point| {
                    whitespace()
                        .flat_map(|()| literal(")"))
                        .map(move |()| point)
                })
        }
    }

    #[test]
    fn test_parse_complete_value() {
        assert_eq!(Point::parse("(1,2)"), Some(Point { x: 1, y: 2 }));
        assert_eq!(Point::parse("( 10 , 20 )"), Some(Point { x: 10, y: 20 }));
    }

    #[test]
    fn test_parse_rejects_partial_and_trailing() {
        assert_eq!(Point::parse("(1,2"), None);
        assert_eq!(Point::parse("(1,2) "), None);
        assert_eq!(Point::parse(""), None);
    }

    #[test]
    fn test_try_from_literal_error() {
        let error = Point::try_from_literal("(1;2)").unwrap_err();

        assert_eq!(error.literal, "(1;2)");
        assert!(error.type_name.ends_with("Point"));
        assert!(error.to_string().starts_with("`(1;2)` is not a valid"));
    }

    #[test]
    fn test_from_literal() {
        assert_eq!(Point::from_literal("(3,4)"), Point { x: 3, y: 4 });
    }

    #[test]
    #[should_panic(expected = "invalid literal: `(3,4` is not a valid")]
    fn test_from_literal_panics_on_bad_text() {
        let _ = Point::from_literal("(3,4");
    }
}
