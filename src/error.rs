use std::fmt;

use thiserror::Error;

/// Longest prefix of the offending input quoted in a diagnostic, in characters
const PREVIEW_CHARS: usize = 16;

/// What a primitive matcher was looking for when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Byte(u8),
    Rune(char),
    String(String),
    CaseInsensitiveString(String),
    RuneFrom(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Byte(byte) => write!(f, "byte 0x{:02X} ({:?})", byte, *byte as char),
            Expected::Rune(rune) => write!(f, "{:?}", rune),
            Expected::String(s) => write!(f, "{:?}", s),
            Expected::CaseInsensitiveString(s) => write!(f, "{:?} (ignoring case)", s),
            Expected::RuneFrom(set) => write!(f, "a rune from {:?}", set),
        }
    }
}

/// What a primitive matcher found instead
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Byte(u8),
    Rune(char),
    Text(String),
}

impl Found {
    /// Quote the start of `input`, cut on a character boundary
    pub fn preview(input: &str) -> Self {
        match input.char_indices().nth(PREVIEW_CHARS) {
            Some((end, _)) => Found::Text(format!("{}...", &input[..end])),
            None => Found::Text(input.to_owned()),
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Byte(byte) => write!(f, "byte 0x{:02X}", byte),
            Found::Rune(rune) => write!(f, "{:?}", rune),
            Found::Text(text) => write!(f, "{:?}", text),
        }
    }
}

/// Why a parser did not match
///
/// Failures are plain values: combinators branch on them (`Or`, `Optional`)
/// or hand them upward (`And`, `Repeat`). A failed parse never consumes input,
/// so the caller's own input is the remainder of every `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty where at least one unit was required
    #[error("ran out of input")]
    Exhausted,

    /// Input was present but did not match
    #[error("expected {expected}, found {found}")]
    Mismatch { expected: Expected, found: Found },

    /// Every alternative of an ordered choice failed
    #[error("no alternative matched")]
    NoMatch,

    /// End of input was required but more input followed
    #[error("expected the end of input, found {found}")]
    UnexpectedInput { found: Found },
}

impl ParseError {
    pub fn mismatch(expected: Expected, found: Found) -> Self {
        ParseError::Mismatch { expected, found }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, ParseError::Exhausted)
    }
}
