use once_cell::sync::Lazy;

use crate::guard::InputGuard;
use crate::utf8::rune_from::{ExpectRuneFrom, expect_rune_from};

static DIGIT: Lazy<InputGuard<ExpectRuneFrom>> = Lazy::new(|| expect_rune_from("1234567890"));

static LETTER: Lazy<InputGuard<ExpectRuneFrom>> = Lazy::new(|| {
    expect_rune_from("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ")
});

static WHITESPACE: Lazy<InputGuard<ExpectRuneFrom>> = Lazy::new(|| expect_rune_from(" \t\r\n"));

/// Parser that matches a single ASCII digit `0-9`
pub fn digit() -> &'static InputGuard<ExpectRuneFrom> {
    &DIGIT
}

/// Parser that matches a single ASCII letter `a-zA-Z`
pub fn letter() -> &'static InputGuard<ExpectRuneFrom> {
    &LETTER
}

/// Parser that matches a single space, tab, carriage return or newline
pub fn whitespace() -> &'static InputGuard<ExpectRuneFrom> {
    &WHITESPACE
}
