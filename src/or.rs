use tracing::trace;

use super::error::ParseError;
use super::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives see the same input. The first success is returned as
/// is. When both fail the result is [`ParseError::NoMatch`]; the individual
/// failures are not kept.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        match self.parser1.parse(input) {
            Ok(result) => return Ok(result),
            Err(error) => trace!(%error, "first alternative failed"),
        }

        match self.parser2.parse(input) {
            Ok(result) => Ok(result),
            Err(error) => {
                trace!(%error, "no alternative matched");
                Err(ParseError::NoMatch)
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over any number of parsers
///
/// `or!(p)` is `p` itself; longer lists nest [`Or`] to the right.
#[macro_export]
macro_rules! or {
    ($parser:expr $(,)?) => {
        $parser
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::or::Or::new($first, $crate::or!($($rest),+))
    };
}
