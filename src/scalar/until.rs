use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::lookahead::Lookahead;
use crate::parser::Parser;

/// Parser that collects scalars until a delimiter parser would match
pub struct CharactersUntil<P> {
    delimiter: Lookahead<P>,
}

impl<P> CharactersUntil<P> {
    pub fn new(delimiter: P) -> Self {
        Self {
            delimiter: Lookahead::new(delimiter),
        }
    }
}

impl<'code, P> Parser<'code> for CharactersUntil<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut current = cursor;

        while !current.eos() {
            if self.delimiter.parse(current).is_ok() {
                break;
            }
            current = current.next();
        }

        Ok((cursor.slice_to(&current), current))
    }
}

/// Parser returning the text up to, but not including, the first place
/// `delimiter` matches
///
/// The delimiter is only tested, never consumed. Reaching the end of input
/// without finding it is not an error: everything that was left is returned.
pub fn characters_until<'code, P>(delimiter: P) -> CharactersUntil<P>
where
    P: Parser<'code>,
{
    CharactersUntil::new(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat_map::FlatMapExt;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::scalar::{any_scalar, literal, non_negative};

    #[test]
    fn test_stops_before_delimiter() {
        let parser = characters_until(literal(","));

        assert_eq!(parser.run_from("ab,cd", 0), (Some("ab"), ",cd"));
    }

    #[test]
    fn test_delimiter_not_found() {
        let parser = characters_until(literal(","));

        assert_eq!(parser.run_from("hello world", 0), (Some("hello world"), ""));
        assert_eq!(parser.run("hello world"), Some("hello world"));
    }

    #[test]
    fn test_empty_result_at_delimiter() {
        let parser = characters_until(literal("\""));

        assert_eq!(parser.run_from("\"hello", 0), (Some(""), "\"hello"));
    }

    #[test]
    fn test_empty_input() {
        let parser = characters_until(literal(","));

        assert_eq!(parser.run_from("", 0), (Some(""), ""));
    }

    #[test]
    fn test_multi_scalar_delimiter() {
        let parser = characters_until(literal("*/"));

        assert_eq!(parser.run_from(" a * b */ code", 0), (Some(" a * b "), "*/ code"));
    }

    #[test]
    fn test_unicode_text_and_delimiter() {
        let parser = characters_until(literal("🦀"));

        assert_eq!(parser.run_from("température🦀world", 0), (Some("température"), "🦀world"));
    }

    #[test]
    fn test_alternative_delimiters() {
        let parser = characters_until(literal(",").or(literal(";")));

        assert_eq!(parser.run_from("hello;world,", 0), (Some("hello"), ";world,"));
    }

    #[test]
    fn test_consuming_delimiter_parser_is_only_tested() {
        // A delimiter that itself consumes two scalars
        let digits_then_letter = non_negative().flat_map(|_| any_scalar());
        let parser = characters_until(digits_then_letter);

        assert_eq!(parser.run_from("abc12x", 0), (Some("abc"), "12x"));
    }

    #[test]
    fn test_csv_like_fields() {
        let field = characters_until(literal(",").or(literal("\n")));
        let row = field.flat_map(|first| {
            literal(",").flat_map(move |()| {
                characters_until(literal("\n")).map(move |second| (first, second))
            })
        });

        assert_eq!(row.run_from("name,age\nrest", 0), (Some(("name", "age")), "\nrest"));
    }
}
