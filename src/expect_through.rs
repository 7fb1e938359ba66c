use tracing::trace;

use super::parser::{ParseResult, Parser};
use super::token::TokenBuf;
use super::utf8::expect_any_rune;

/// Parser that consumes one scalar at a time up to and including a terminator
///
/// Scans like [`ExpectUntil`](crate::expect_until::ExpectUntil), but once the
/// terminator matches, its token is appended and its match is consumed.
#[derive(Debug, Clone)]
pub struct ExpectThrough<P> {
    terminator: P,
}

impl<P> ExpectThrough<P> {
    pub fn new(terminator: P) -> Self {
        ExpectThrough { terminator }
    }
}

impl<P: Parser> Parser for ExpectThrough<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let any_rune = expect_any_rune();
        let mut token = TokenBuf::new(input);
        let mut rest = input;

        loop {
            if let Ok((matched, next)) = self.terminator.parse(rest) {
                token.push(matched, rest, next);
                return Ok((token.finish(), next));
            }

            // Force progress so the terminator is probed at the next scalar
            match any_rune.parse(rest) {
                Ok((rune, next)) => {
                    token.push(rune, rest, next);
                    rest = next;
                }
                Err(error) => {
                    trace!(scanned = input.len() - rest.len(), "terminator never matched");
                    return Err(error);
                }
            }
        }
    }
}

/// Convenience function to create an ExpectThrough parser
pub fn expect_through<P: Parser>(terminator: P) -> ExpectThrough<P> {
    ExpectThrough::new(terminator)
}
