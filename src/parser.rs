use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::error::ParseError;

/// Text consumed by a successful parse
///
/// Borrowed from the input whenever the kept text is contiguous; owned only
/// when a dropped token inside a sequence leaves a gap.
pub type Token<'a> = Cow<'a, str>;

/// `(token, remainder)` on success. A failure consumes nothing.
pub type ParseResult<'a> = Result<(Token<'a>, &'a str), ParseError>;

/// Core parser trait for parser combinators
pub trait Parser {
    /// Attempt to parse a prefix of `input`
    ///
    /// Returns the consumed token and the unconsumed remainder on success,
    /// or the reason for failure. Failures must not consume input.
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a>;
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (**self).parse(input)
    }
}

/// A type-erased parser, shareable across threads
pub type BoxedParser = Box<dyn Parser + Send + Sync>;

/// Erase the concrete type of a parser
pub fn boxed<P>(parser: P) -> BoxedParser
where
    P: Parser + Send + Sync + 'static,
{
    Box::new(parser)
}

/// Parser backed by a plain function
///
/// Grammars that refer to themselves are written as `fn` items and wrapped
/// at the point of use:
///
/// ```
/// use runecomb::{Parser, ParseResult, and, or, from_fn};
/// use runecomb::utf8::expect_rune;
///
/// fn nested(input: &str) -> ParseResult<'_> {
///     or!(
///         and!(expect_rune('('), from_fn(nested), expect_rune(')')),
///         expect_rune('x')
///     )
///     .parse(input)
/// }
///
/// let (token, rest) = from_fn(nested).parse("((x))!").unwrap();
/// assert_eq!(token, "((x))");
/// assert_eq!(rest, "!");
/// ```
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    function: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("function", &"<function>")
            .finish()
    }
}

impl<F> Parser for FromFn<F>
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a>,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (self.function)(input)
    }
}

/// Convenience function to create a FromFn parser
pub fn from_fn<F>(function: F) -> FromFn<F>
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a>,
{
    FromFn { function }
}
