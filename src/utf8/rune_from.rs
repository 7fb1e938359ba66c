use std::borrow::Cow;

use rustc_hash::FxHashSet;

use crate::error::{Expected, Found, ParseError};
use crate::guard::InputGuard;
use crate::parser::{ParseResult, Parser};
use crate::utf8::rune::split_rune;

/// Parser that matches one scalar drawn from a fixed set
///
/// Membership is precomputed once at construction.
#[derive(Debug, Clone)]
pub struct ExpectRuneFrom {
    set: FxHashSet<char>,
    source: Cow<'static, str>,
}

impl ExpectRuneFrom {
    pub fn new(runes: impl Into<Cow<'static, str>>) -> Self {
        let source = runes.into();
        let set = source.chars().collect();
        Self { set, source }
    }

    pub fn contains(&self, rune: char) -> bool {
        self.set.contains(&rune)
    }
}

impl Parser for ExpectRuneFrom {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let (rune, head, rest) = split_rune(input).ok_or(ParseError::Exhausted)?;
        if self.contains(rune) {
            Ok((Cow::Borrowed(head), rest))
        } else {
            Err(ParseError::mismatch(
                Expected::RuneFrom(self.source.to_string()),
                Found::Rune(rune),
            ))
        }
    }
}

/// Convenience function to create a guarded ExpectRuneFrom parser
pub fn expect_rune_from(runes: impl Into<Cow<'static, str>>) -> InputGuard<ExpectRuneFrom> {
    InputGuard::new(ExpectRuneFrom::new(runes))
}
