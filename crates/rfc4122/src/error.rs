//! Error types for UUID decoding.
//!
//! Every failure in this crate is one of two kinds: a binary input with the
//! wrong length, or a textual input that matches none of the accepted grammars.

use thiserror::Error;

/// Maximum number of characters of offending input kept in a format error.
pub const MAX_EXCERPT_CHARS: usize = 48;

/// Error category, for callers that only need to branch on the failing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Binary input was not exactly 16 bytes.
    Length,
    /// Textual input did not match an accepted form.
    Format,
}

/// Error returned by every fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid UUID length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid UUID string {input:?}: {reason}")]
    InvalidFormat { input: String, reason: &'static str },
}

impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidLength { .. } => ErrorKind::Length,
            Error::InvalidFormat { .. } => ErrorKind::Format,
        }
    }

    pub(crate) fn length(actual: usize) -> Self {
        Error::InvalidLength {
            expected: 16,
            actual,
        }
    }

    /// Builds a format error, keeping at most [`MAX_EXCERPT_CHARS`] characters of `input`.
    pub(crate) fn format(input: &[u8], reason: &'static str) -> Self {
        let lossy = String::from_utf8_lossy(input);
        let input = match lossy.char_indices().nth(MAX_EXCERPT_CHARS) {
            Some((cut, _)) => format!("{}...", &lossy[..cut]),
            None => lossy.into_owned(),
        };
        Error::InvalidFormat { input, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_error_message() {
        let err = Error::length(3);
        assert_eq!(err.kind(), ErrorKind::Length);
        assert_eq!(
            err.to_string(),
            "invalid UUID length: expected 16 bytes, got 3"
        );
    }

    #[test]
    fn test_format_error_keeps_short_input() {
        let err = Error::format(b"not-a-uuid", "invalid length");
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(
            err,
            Error::InvalidFormat {
                input: "not-a-uuid".to_string(),
                reason: "invalid length",
            }
        );
    }

    #[test]
    fn test_format_error_truncates_long_input() {
        let long = "a".repeat(500);
        match Error::format(long.as_bytes(), "invalid length") {
            Error::InvalidFormat { input, .. } => {
                assert_eq!(input.len(), MAX_EXCERPT_CHARS + 3);
                assert!(input.ends_with("..."));
            }
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_format_error_non_utf8_input() {
        let err = Error::format(&[0xff, 0xfe, b'a'], "invalid hex digit");
        match err {
            Error::InvalidFormat { input, reason } => {
                assert!(input.ends_with('a'));
                assert_eq!(reason, "invalid hex digit");
            }
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }
}
