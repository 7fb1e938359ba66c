//! # runecomb - Parser Combinators over UTF-8 Text
//!
//! A small set of primitive matchers and higher-order combinators that compose
//! into parsers for arbitrary grammars, with no separate lexer or grammar
//! compiler. Every parser maps an input `&str` to the token it consumed and
//! the remainder that follows, or to a [`ParseError`].
//!
//! - **No partial consumption**: a failed parse never consumes input
//! - **Content preserving**: on success the token is the consumed prefix and
//!   the remainder the exact suffix after it, unless a token is dropped on purpose
//! - **Stateless**: parsers hold only their construction arguments and can be
//!   shared freely across threads
//! - **Borrowing**: tokens borrow from the input unless dropped text leaves a gap
//!
//! ```
//! use runecomb::{Parser, and};
//! use runecomb::ascii::{digit, letter, whitespace};
//! use runecomb::drop::DropExt;
//! use runecomb::eoi::expect_eoi;
//! use runecomb::optional::OptionalExt;
//! use runecomb::or::OrExt;
//! use runecomb::repeat::RepeatExt;
//! use runecomb::utf8::expect_rune;
//!
//! let identifier = and!(letter(), letter().or(digit()).repeat().optional());
//! let assignment = and!(
//!     identifier,
//!     whitespace().repeat().optional().drop_token(),
//!     expect_rune('='),
//!     whitespace().repeat().optional().drop_token(),
//!     digit().repeat(),
//!     expect_eoi(),
//! );
//!
//! let (token, rest) = assignment.parse("x1 = 42").unwrap();
//! assert_eq!(token, "x1=42");
//! assert_eq!(rest, "");
//! ```

pub mod and;
pub mod ascii;
pub mod byte;
pub mod drop;
pub mod eoi;
pub mod error;
pub mod expect_through;
pub mod expect_until;
pub mod guard;
pub mod optional;
pub mod or;
pub mod parser;
pub mod repeat;
mod token;
pub mod utf8;

pub use error::{Expected, Found, ParseError};
pub use guard::{InputGuard, check_input_size};
pub use parser::{BoxedParser, FromFn, ParseResult, Parser, Token, boxed, from_fn};
