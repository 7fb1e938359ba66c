use std::borrow::Cow;

use super::parser::{ParseResult, Parser};

/// Parser combinator that consumes like its parser but yields an empty token
///
/// Useful for skipping separators inside a sequence without them showing up
/// in the sequence's token.
#[derive(Debug, Clone)]
pub struct DropToken<P> {
    parser: P,
}

impl<P> DropToken<P> {
    pub fn new(parser: P) -> Self {
        DropToken { parser }
    }
}

impl<P: Parser> Parser for DropToken<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let (_, rest) = self.parser.parse(input)?;
        Ok((Cow::Borrowed(""), rest))
    }
}

/// Convenience function to create a DropToken parser
pub fn drop_token<P: Parser>(parser: P) -> DropToken<P> {
    DropToken::new(parser)
}

/// Extension trait to add .drop_token() method support for parsers
pub trait DropExt: Parser + Sized {
    fn drop_token(self) -> DropToken<Self> {
        DropToken::new(self)
    }
}

/// Implement DropExt for all parsers
impl<P> DropExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::whitespace;
    use crate::error::ParseError;
    use crate::repeat::RepeatExt;
    use crate::utf8::{expect_rune, expect_string};

    #[test]
    fn test_drop_discards_token_keeps_consumption() {
        let (token, rest) = drop_token(expect_string("abc")).parse("abcdef").unwrap();
        assert_eq!(token, "");
        assert_eq!(rest, "def");
    }

    #[test]
    fn test_drop_passes_failure_through() {
        assert_eq!(
            drop_token(expect_rune('x')).parse("abc"),
            expect_rune('x').parse("abc")
        );
        assert_eq!(
            drop_token(expect_rune('x')).parse(""),
            Err(ParseError::Exhausted)
        );
    }

    #[test]
    fn test_drop_whitespace_between_words() {
        let parser = expect_string("hello")
            .and(whitespace().repeat().drop_token())
            .and(expect_string("world"));

        let (token, rest) = parser.parse("hello \t world!").unwrap();
        assert_eq!(token, "helloworld");
        assert_eq!(rest, "!");
    }
}
