use tracing::trace;

use super::parser::{ParseResult, Parser};
use super::token::TokenBuf;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Greedy and non-backtracking: applies the parser until it fails and keeps
/// everything matched before that. Zero occurrences is a failure carrying the
/// parser's own error. A match that consumes nothing ends the loop, since
/// applying it again would match the same empty text forever.
#[derive(Debug, Clone)]
pub struct Repeat<P> {
    parser: P,
}

impl<P> Repeat<P> {
    pub fn new(parser: P) -> Self {
        Repeat { parser }
    }
}

impl<P: Parser> Parser for Repeat<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let mut token = TokenBuf::new(input);

        // First parse must succeed
        let (first, mut rest) = self.parser.parse(input)?;
        token.push(first, input, rest);
        let mut count = 1usize;

        loop {
            match self.parser.parse(rest) {
                Ok((_, next)) if next.len() == rest.len() => {
                    trace!(count, "repeat stopped on a zero-width match");
                    break;
                }
                Ok((value, next)) => {
                    token.push(value, rest, next);
                    rest = next;
                    count += 1;
                }
                Err(error) => {
                    trace!(count, %error, "repeat stopped");
                    break;
                }
            }
        }

        Ok((token.finish(), rest))
    }
}

/// Convenience function to create a Repeat parser
pub fn repeat<P: Parser>(parser: P) -> Repeat<P> {
    Repeat::new(parser)
}

/// Extension trait to add .repeat() method support for parsers
pub trait RepeatExt: Parser + Sized {
    fn repeat(self) -> Repeat<Self> {
        Repeat::new(self)
    }
}

/// Implement RepeatExt for all parsers
impl<P> RepeatExt for P where P: Parser {}
