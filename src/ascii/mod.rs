pub mod class;
pub mod newline;

pub use class::{digit, letter, whitespace};
pub use newline::{Newline, newline, unix_newline, windows_newline};
