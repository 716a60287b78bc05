//! Error types for the gen-drv system.
//!
//! The encoder itself is a total function over a fixed-size register, so the
//! only failures are on the way in: malformed hex input or bad command-line
//! usage. Every error is terminal for a run.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Hex: the input string could not be turned into a DRV byte buffer
/// - Usage: the command line was malformed (wrong argument count, etc.)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Hex input validation failed
    #[error(transparent)]
    Hex(#[from] HexError),

    /// Command-line usage error
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Whether the usage text should be printed after this error.
    ///
    /// Wrong usage and wrong input length point the user at the usage text;
    /// a bad character in an otherwise well-formed string does not.
    pub fn shows_usage(&self) -> bool {
        match self {
            Error::Usage(_) => true,
            Error::Hex(HexError::InvalidLength { .. }) => true,
            Error::Hex(HexError::InvalidCharacter { .. }) => false,
        }
    }
}

/// Hex input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// Input string is not exactly two hex digits per register byte
    #[error("Invalid Input string Length: expected {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input string contains something other than `0-9`, `a-f`, `A-F`
    #[error(
        "Input string is not having valid hexadecimal character: {character:?} at position {position}"
    )]
    InvalidCharacter { character: char, position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_shown_for_length_and_usage_errors() {
        assert!(Error::Usage("Wrong Usage".to_string()).shows_usage());
        assert!(Error::from(HexError::InvalidLength {
            expected: 16,
            actual: 4
        })
        .shows_usage());
    }

    #[test]
    fn test_usage_not_shown_for_bad_character() {
        let err = Error::from(HexError::InvalidCharacter {
            character: 'g',
            position: 14,
        });
        assert!(!err.shows_usage());
    }

    #[test]
    fn test_messages() {
        let err = Error::from(HexError::InvalidLength {
            expected: 16,
            actual: 4,
        });
        assert_eq!(
            err.to_string(),
            "Invalid Input string Length: expected 16 hex digits, got 4"
        );

        let err = Error::Usage("Wrong Usage".to_string());
        assert_eq!(err.to_string(), "Wrong Usage");
    }
}
