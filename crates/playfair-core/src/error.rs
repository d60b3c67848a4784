//! Error types for the Playfair cipher library.

use std::fmt;

/// Errors produced when deriving a square from a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayfairError {
    /// Keyword contains no letters after sanitization.
    EmptyKeyword,
    /// Keyword contains 'i', 'j' and 'z' at once; no single letter fold
    /// fits the remaining alphabet into 25 cells.
    UnresolvableFold,
}

impl fmt::Display for PlayfairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayfairError::EmptyKeyword => {
                write!(f, "Keyword must contain at least one letter")
            }
            PlayfairError::UnresolvableFold => {
                write!(
                    f,
                    "Keyword uses 'i', 'j' and 'z' together; no letter fold fits 26 letters into 25 cells"
                )
            }
        }
    }
}

impl std::error::Error for PlayfairError {}
