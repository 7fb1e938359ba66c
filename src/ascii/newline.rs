use once_cell::sync::Lazy;

use crate::guard::InputGuard;
use crate::or::Or;
use crate::utf8::rune::{ExpectRune, expect_rune};
use crate::utf8::string::{ExpectString, expect_string};

/// Unix newline, or failing that a Windows one
pub type Newline = Or<InputGuard<ExpectRune>, InputGuard<ExpectString>>;

static UNIX_NEWLINE: Lazy<InputGuard<ExpectRune>> = Lazy::new(|| expect_rune('\n'));

static WINDOWS_NEWLINE: Lazy<InputGuard<ExpectString>> = Lazy::new(|| expect_string("\r\n"));

static NEWLINE: Lazy<Newline> =
    Lazy::new(|| Or::new((*UNIX_NEWLINE).clone(), (*WINDOWS_NEWLINE).clone()));

/// Parser that matches `\n`
pub fn unix_newline() -> &'static InputGuard<ExpectRune> {
    &UNIX_NEWLINE
}

/// Parser that matches `\r\n`
pub fn windows_newline() -> &'static InputGuard<ExpectString> {
    &WINDOWS_NEWLINE
}

/// Parser that matches a Unix newline, or failing that a Windows one
pub fn newline() -> &'static Newline {
    &NEWLINE
}
