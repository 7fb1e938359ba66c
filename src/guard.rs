use super::error::ParseError;
use super::parser::{ParseResult, Parser};

/// Fails with [`ParseError::Exhausted`] on empty input without consulting the
/// wrapped parser; otherwise delegates unchanged
///
/// Every primitive matcher except end-of-input comes wrapped in this guard.
#[derive(Debug, Clone)]
pub struct InputGuard<P> {
    parser: P,
}

impl<P> InputGuard<P> {
    pub fn new(parser: P) -> Self {
        InputGuard { parser }
    }

    pub fn inner(&self) -> &P {
        &self.parser
    }
}

impl<P: Parser> Parser for InputGuard<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        if input.is_empty() {
            return Err(ParseError::Exhausted);
        }
        self.parser.parse(input)
    }
}

/// Convenience function to create an InputGuard
pub fn check_input_size<P: Parser>(parser: P) -> InputGuard<P> {
    InputGuard::new(parser)
}
