use std::borrow::Cow;

use crate::error::{Expected, Found, ParseError};
use crate::guard::InputGuard;
use crate::parser::{ParseResult, Parser};

/// Parser that matches an exact literal, byte for byte
#[derive(Debug, Clone)]
pub struct ExpectString {
    expected: Cow<'static, str>,
}

impl ExpectString {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for ExpectString {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let len = self.expected.len();
        if input.len() < len {
            return Err(ParseError::Exhausted);
        }

        match input.strip_prefix(&*self.expected) {
            // A matched literal ends on a character boundary
            Some(rest) => Ok((Cow::Borrowed(&input[..len]), rest)),
            None => Err(ParseError::mismatch(
                Expected::String(self.expected.to_string()),
                Found::preview(prefix_of_width(input, len)),
            )),
        }
    }
}

/// Convenience function to create a guarded ExpectString parser
pub fn expect_string(expected: impl Into<Cow<'static, str>>) -> InputGuard<ExpectString> {
    InputGuard::new(ExpectString::new(expected))
}

/// Parser that matches a literal ignoring case, keeping the input's casing
///
/// Comparison is scalar by scalar on case-folded forms, so a match may differ
/// in byte length from the literal (e.g. KELVIN SIGN against `k`).
#[derive(Debug, Clone)]
pub struct ExpectCaseInsensitiveString {
    expected: Cow<'static, str>,
}

impl ExpectCaseInsensitiveString {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    fn mismatch(&self, found: &str) -> ParseError {
        ParseError::mismatch(
            Expected::CaseInsensitiveString(self.expected.to_string()),
            Found::preview(found),
        )
    }
}

impl Parser for ExpectCaseInsensitiveString {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let mut found = input.char_indices();
        let mut end = 0;

        for expected in self.expected.chars() {
            let Some((offset, rune)) = found.next() else {
                return Err(ParseError::Exhausted);
            };
            end = offset + rune.len_utf8();

            if !same_case_folded(rune, expected) {
                return Err(self.mismatch(&input[..end]));
            }
        }

        Ok((Cow::Borrowed(&input[..end]), &input[end..]))
    }
}

/// Convenience function to create a guarded ExpectCaseInsensitiveString parser
pub fn expect_case_insensitive_string(
    expected: impl Into<Cow<'static, str>>,
) -> InputGuard<ExpectCaseInsensitiveString> {
    InputGuard::new(ExpectCaseInsensitiveString::new(expected))
}

/// Whether two scalars agree once case is folded
///
/// Lowercase alone misses pairs like final sigma and sigma, which only meet
/// in uppercase.
fn same_case_folded(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

/// The shortest prefix of `input` covering at least `width` bytes
fn prefix_of_width(input: &str, width: usize) -> &str {
    let mut end = width.min(input.len());
    while !input.is_char_boundary(end) {
        end += 1;
    }
    &input[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let (token, rest) = expect_string("Hello").parse("Hello World").unwrap();
        assert_eq!(token, "Hello");
        assert_eq!(rest, " World");
    }

    #[test]
    fn test_exact_match_whole_input() {
        let (token, rest) = expect_string("hello").parse("hello").unwrap();
        assert_eq!(token, "hello");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_unicode_literal() {
        let (token, rest) = expect_string("こんにちは").parse("こんにちは世界").unwrap();
        assert_eq!(token, "こんにちは");
        assert_eq!(rest, "世界");
    }

    #[test]
    fn test_mismatch_reports_same_width() {
        let error = expect_string("Hello").parse("Help me").unwrap_err();
        assert_eq!(
            error,
            ParseError::mismatch(
                Expected::String("Hello".into()),
                Found::Text("Help ".into())
            )
        );
    }

    #[test]
    fn test_mismatch_found_respects_char_boundary() {
        // Five bytes of "aaééé" would cut the second 'é' in half
        let error = expect_string("aaaaa").parse("aaééé").unwrap_err();
        assert_eq!(
            error,
            ParseError::mismatch(
                Expected::String("aaaaa".into()),
                Found::Text("aaéé".into())
            )
        );
    }

    #[test]
    fn test_short_input_is_exhausted() {
        assert_eq!(expect_string("Hello").parse("Hel"), Err(ParseError::Exhausted));
        assert_eq!(expect_string("Hello").parse(""), Err(ParseError::Exhausted));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(expect_string("hello").parse("HELLO").is_err());
    }

    #[test]
    fn test_owned_literal() {
        let literal = String::from("let");
        let (token, rest) = expect_string(literal).parse("let x").unwrap();
        assert_eq!(token, "let");
        assert_eq!(rest, " x");
    }

    #[test]
    fn test_case_insensitive_keeps_input_casing() {
        let (token, rest) = expect_case_insensitive_string("HELLO")
            .parse("Hello World")
            .unwrap();
        assert_eq!(token, "Hello");
        assert_eq!(rest, " World");
    }

    #[test]
    fn test_case_insensitive_unicode() {
        let (token, rest) = expect_case_insensitive_string("ÅÄÖ").parse("åäö!").unwrap();
        assert_eq!(token, "åäö");
        assert_eq!(rest, "!");
    }

    #[test]
    fn test_case_insensitive_width_differs_from_literal() {
        // U+212A KELVIN SIGN lowercases to 'k'
        let (token, rest) = expect_case_insensitive_string("k").parse("\u{212A}m").unwrap();
        assert_eq!(token, "\u{212A}");
        assert_eq!(rest, "m");
    }

    #[test]
    fn test_case_insensitive_folds_through_uppercase() {
        // Final sigma lowercases to itself but uppercases to Σ, like σ
        let (token, rest) = expect_case_insensitive_string("σ").parse("ς!").unwrap();
        assert_eq!(token, "ς");
        assert_eq!(rest, "!");

        // MICRO SIGN and GREEK SMALL LETTER MU share the uppercase Μ
        let (token, rest) = expect_case_insensitive_string("μ").parse("\u{00B5}!").unwrap();
        assert_eq!(token, "\u{00B5}");
        assert_eq!(rest, "!");

        let (token, rest) = expect_case_insensitive_string("ΟΔΟΣ").parse("οδος end").unwrap();
        assert_eq!(token, "οδος");
        assert_eq!(rest, " end");
    }

    #[test]
    fn test_same_case_folded() {
        assert!(same_case_folded('a', 'A'));
        assert!(same_case_folded('ς', 'Σ'));
        assert!(!same_case_folded('a', 'b'));
        assert!(!same_case_folded('σ', 'μ'));
    }

    #[test]
    fn test_case_insensitive_mismatch() {
        let error = expect_case_insensitive_string("select")
            .parse("SELL all")
            .unwrap_err();
        assert_eq!(
            error,
            ParseError::mismatch(
                Expected::CaseInsensitiveString("select".into()),
                Found::Text("SELL".into())
            )
        );
    }

    #[test]
    fn test_case_insensitive_short_input_is_exhausted() {
        assert_eq!(
            expect_case_insensitive_string("select").parse("SEL"),
            Err(ParseError::Exhausted)
        );
    }

    #[test]
    fn test_prefix_of_width() {
        assert_eq!(prefix_of_width("abc", 2), "ab");
        assert_eq!(prefix_of_width("aé", 2), "aé");
        assert_eq!(prefix_of_width("ab", 5), "ab");
    }
}
