//! Error types for the Gyre transposition core.
//!
//! Only two conditions are fatal at the encode/decode boundary: a length
//! declaration that cannot describe the ciphertext, and a strength outside
//! the four recognised levels. Empty and single-character messages are
//! degenerate but valid and never produce an error.

use std::error::Error;
use std::fmt;

/// Errors returned by [`Transposition`](crate::Transposition) implementations.
///
/// Every call either returns a complete result or one of these errors; a
/// partially permuted buffer is never handed back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranspositionError {
    /// Declared tier lengths disagree with the ciphertext or with the
    /// geometry recomputed from the message length.
    InvalidLength {
        /// Description of the mismatch.
        reason: String,
    },
    /// The strength value is not one of weak, medium, strong or extreme.
    UnsupportedStrength {
        /// The rejected value as supplied by the caller.
        value: String,
    },
}

impl fmt::Display for TranspositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { reason } => write!(f, "invalid length: {reason}"),
            Self::UnsupportedStrength { value } => write!(
                f,
                "unsupported strength '{value}' (expected weak, medium, strong or extreme)"
            ),
        }
    }
}

impl Error for TranspositionError {}
