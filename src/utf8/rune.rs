use std::borrow::Cow;

use crate::error::{Expected, Found, ParseError};
use crate::guard::InputGuard;
use crate::parser::{ParseResult, Parser};

/// Split the leading scalar off `input`: `(rune, its text, the rest)`
pub(crate) fn split_rune(input: &str) -> Option<(char, &str, &str)> {
    let rune = input.chars().next()?;
    let (head, rest) = input.split_at(rune.len_utf8());
    Some((rune, head, rest))
}

/// Parser that consumes and returns any single Unicode scalar
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectAnyRune;

impl Parser for ExpectAnyRune {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let (_, head, rest) = split_rune(input).ok_or(ParseError::Exhausted)?;
        Ok((Cow::Borrowed(head), rest))
    }
}

/// Convenience function to create a guarded ExpectAnyRune parser
pub fn expect_any_rune() -> InputGuard<ExpectAnyRune> {
    InputGuard::new(ExpectAnyRune)
}

/// Parser that matches a specific Unicode scalar
#[derive(Debug, Clone, Copy)]
pub struct ExpectRune {
    expected: char,
}

impl ExpectRune {
    pub fn new(expected: char) -> Self {
        ExpectRune { expected }
    }
}

impl Parser for ExpectRune {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let (rune, head, rest) = split_rune(input).ok_or(ParseError::Exhausted)?;
        if rune == self.expected {
            Ok((Cow::Borrowed(head), rest))
        } else {
            Err(ParseError::mismatch(
                Expected::Rune(self.expected),
                Found::Rune(rune),
            ))
        }
    }
}

/// Convenience function to create a guarded ExpectRune parser
pub fn expect_rune(expected: char) -> InputGuard<ExpectRune> {
    InputGuard::new(ExpectRune::new(expected))
}
