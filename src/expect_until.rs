use std::borrow::Cow;

use tracing::trace;

use super::parser::{ParseResult, Parser};
use super::utf8::expect_any_rune;

/// Parser that consumes one scalar at a time until a terminator parser matches
///
/// The terminator is only probed: its match is neither part of the token nor
/// consumed, so the remainder starts where it matched. Running out of input
/// before the terminator ever matches is [`ParseError::Exhausted`](crate::ParseError::Exhausted).
#[derive(Debug, Clone)]
pub struct ExpectUntil<P> {
    terminator: P,
}

impl<P> ExpectUntil<P> {
    pub fn new(terminator: P) -> Self {
        ExpectUntil { terminator }
    }
}

impl<P: Parser> Parser for ExpectUntil<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let any_rune = expect_any_rune();
        let mut rest = input;

        while self.terminator.parse(rest).is_err() {
            // Force progress so the terminator is probed at the next scalar
            rest = match any_rune.parse(rest) {
                Ok((_, next)) => next,
                Err(error) => {
                    trace!(scanned = input.len() - rest.len(), "terminator never matched");
                    return Err(error);
                }
            };
        }

        let consumed = input.len() - rest.len();
        Ok((Cow::Borrowed(&input[..consumed]), rest))
    }
}

/// Convenience function to create an ExpectUntil parser
pub fn expect_until<P: Parser>(terminator: P) -> ExpectUntil<P> {
    ExpectUntil::new(terminator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eoi::expect_eoi;
    use crate::error::ParseError;
    use crate::or::OrExt;
    use crate::utf8::{expect_rune, expect_string};

    #[test]
    fn test_until_stops_before_terminator() {
        let (token, rest) = expect_until(expect_string("bb"))
            .parse("aaabaaabbaaa")
            .unwrap();
        assert_eq!(token, "aaabaaa");
        assert_eq!(rest, "bbaaa");
    }

    #[test]
    fn test_until_terminator_at_start() {
        let (token, rest) = expect_until(expect_rune('"')).parse("\"hello").unwrap();
        assert_eq!(token, "");
        assert_eq!(rest, "\"hello");
    }

    #[test]
    fn test_until_unicode() {
        let (token, rest) = expect_until(expect_rune('🦀')).parse("température🦀world").unwrap();
        assert_eq!(token, "température");
        assert_eq!(rest, "🦀world");
    }

    #[test]
    fn test_until_either_terminator() {
        let parser = expect_until(expect_rune(',').or(expect_rune(';')));
        let (token, rest) = parser.parse("hello;world,").unwrap();
        assert_eq!(token, "hello");
        assert_eq!(rest, ";world,");
    }

    #[test]
    fn test_until_not_found_is_exhausted() {
        assert_eq!(
            expect_until(expect_rune('x')).parse("hello world"),
            Err(ParseError::Exhausted)
        );
    }

    #[test]
    fn test_until_empty_input() {
        assert_eq!(
            expect_until(expect_rune('x')).parse(""),
            Err(ParseError::Exhausted)
        );
    }

    #[test]
    fn test_until_end_of_input() {
        let (token, rest) = expect_until(expect_eoi()).parse("rest of line").unwrap();
        assert_eq!(token, "rest of line");
        assert_eq!(rest, "");
    }
}
