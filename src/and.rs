use super::parser::{ParseResult, Parser};
use super::token::TokenBuf;

/// Parser combinator that sequences two parsers and concatenates their tokens
///
/// All or nothing: if either parser fails, the failure is returned and no
/// input is consumed. Longer sequences nest, and since concatenation is
/// associative `a.and(b).and(c)` and `a.and(b.and(c))` produce the same
/// token. The [`and!`](crate::and!) macro builds them for any arity.
///
/// Example:
/// ```
/// use runecomb::Parser;
/// use runecomb::and::AndExt;
/// use runecomb::utf8::{expect_rune, expect_string};
///
/// let parser = expect_string("let").and(expect_rune(' ')).and(expect_rune('x'));
/// let (token, rest) = parser.parse("let x = 1").unwrap();
/// assert_eq!(token, "let x");
/// assert_eq!(rest, " = 1");
/// ```
#[derive(Debug, Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let mut token = TokenBuf::new(input);

        let (first, middle) = self.parser1.parse(input)?;
        token.push(first, input, middle);

        let (second, rest) = self.parser2.parse(middle)?;
        token.push(second, middle, rest);

        Ok((token.finish(), rest))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}

/// Sequence any number of parsers, concatenating their tokens
///
/// `and!(p)` is `p` itself; longer lists nest [`And`] to the right.
///
/// ```
/// use runecomb::{Parser, and};
/// use runecomb::optional::optional;
/// use runecomb::utf8::expect_rune;
///
/// let list = and!(expect_rune('a'), optional(expect_rune(',')), expect_rune('b'));
/// assert_eq!(list.parse("a,b").unwrap().0, "a,b");
/// assert_eq!(list.parse("ab").unwrap().0, "ab");
/// ```
#[macro_export]
macro_rules! and {
    ($parser:expr $(,)?) => {
        $parser
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::and::And::new($first, $crate::and!($($rest),+))
    };
}
