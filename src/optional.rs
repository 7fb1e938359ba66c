use std::borrow::Cow;

use tracing::trace;

use super::parser::{ParseResult, Parser};

/// Parser combinator that turns a failure into an empty match
///
/// Never fails, not even on empty input.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P: Parser> Parser for Optional<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        match self.parser.parse(input) {
            Ok(result) => Ok(result),
            Err(error) => {
                trace!(%error, "optional parser skipped");
                Ok((Cow::Borrowed(&input[..0]), input))
            }
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}
