pub mod rune;
pub mod rune_from;
pub mod string;

pub use rune::{ExpectAnyRune, ExpectRune, expect_any_rune, expect_rune};
pub use rune_from::{ExpectRuneFrom, expect_rune_from};
pub use string::{
    ExpectCaseInsensitiveString, ExpectString, expect_case_insensitive_string, expect_string,
};
