use std::borrow::Cow;

use super::error::{Expected, Found, ParseError};
use super::guard::InputGuard;
use super::parser::{ParseResult, Parser};

/// Parser that matches a specific leading byte
///
/// Tokens are `&str`, so a byte that would split a multi-byte scalar never
/// matches. In practice `expected` is ASCII.
#[derive(Debug, Clone, Copy)]
pub struct ExpectByte {
    expected: u8,
}

impl ExpectByte {
    pub fn new(expected: u8) -> Self {
        ExpectByte { expected }
    }
}

impl Parser for ExpectByte {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let Some(&byte) = input.as_bytes().first() else {
            return Err(ParseError::Exhausted);
        };

        if byte == self.expected && input.is_char_boundary(1) {
            Ok((Cow::Borrowed(&input[..1]), &input[1..]))
        } else {
            Err(ParseError::mismatch(
                Expected::Byte(self.expected),
                Found::Byte(byte),
            ))
        }
    }
}

/// Convenience function to create a guarded ExpectByte parser
pub fn expect_byte(expected: u8) -> InputGuard<ExpectByte> {
    InputGuard::new(ExpectByte::new(expected))
}
