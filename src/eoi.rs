use std::borrow::Cow;

use super::error::{Found, ParseError};
use super::parser::{ParseResult, Parser};

/// Parser that succeeds only on empty input
///
/// Not input-guarded: empty input is exactly what it is looking for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectEoi;

impl Parser for ExpectEoi {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        if input.is_empty() {
            Ok((Cow::Borrowed(input), input))
        } else {
            Err(ParseError::UnexpectedInput {
                found: Found::preview(input),
            })
        }
    }
}

/// Convenience function to create an ExpectEoi parser
pub fn expect_eoi() -> ExpectEoi {
    ExpectEoi
}
