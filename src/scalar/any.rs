use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Parser that consumes exactly one scalar, whatever it is
pub struct AnyScalar;

impl<'code> Parser<'code> for AnyScalar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let scalar = cursor.value().ok_or(NoMatch)?;
        Ok((scalar, cursor.next()))
    }
}

/// Parser that matches any single scalar and fails only at end of input
pub fn any_scalar() -> AnyScalar {
    AnyScalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_scalar_ascii() {
        let (scalar, cursor) = any_scalar().parse(Cursor::new("abc")).unwrap();

        assert_eq!(scalar, 'a');
        assert_eq!(cursor.value(), Some('b'));
    }

    #[test]
    fn test_any_scalar_multibyte() {
        assert_eq!(any_scalar().run_from("🦀rust", 0), (Some('🦀'), "rust"));
        assert_eq!(any_scalar().run("é"), Some('é'));
    }

    #[test]
    fn test_any_scalar_combining_mark_is_separate() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT is two scalars
        assert_eq!(any_scalar().run_from("e\u{301}", 0), (Some('e'), "\u{301}"));
    }

    #[test]
    fn test_any_scalar_empty_input() {
        assert_eq!(any_scalar().parse(Cursor::new("")), Err(NoMatch));
        assert_eq!(any_scalar().run_from("", 0), (None, ""));
    }
}
