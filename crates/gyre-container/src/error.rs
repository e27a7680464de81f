//! Error types for the cipher container.

use std::fmt;
use std::io;

use gyre_core::TranspositionError;

/// Errors that can occur while writing, reading, or opening a container.
#[derive(Debug)]
pub enum ContainerError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The text does not start with the `GRAVITY_SPIRAL_CIPHER` marker line.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the header.
        found: u8,
    },
    /// A header line is missing, out of order, or unparseable, or the
    /// header disagrees with the ciphertext it describes.
    MalformedHeader {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The recorded checksum does not match the ciphertext.
    ChecksumMismatch {
        /// Checksum from the container header.
        recorded: u64,
        /// Checksum computed from the ciphertext body.
        computed: u64,
    },
    /// Encoding or decoding the payload failed.
    Transposition(TranspositionError),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid marker line (expected GRAVITY_SPIRAL_CIPHER)"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::MalformedHeader { detail } => write!(f, "malformed header: {detail}"),
            Self::ChecksumMismatch { recorded, computed } => {
                write!(
                    f,
                    "checksum mismatch: recorded={recorded:#018x}, computed={computed:#018x}"
                )
            }
            Self::Transposition(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Transposition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ContainerError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<TranspositionError> for ContainerError {
    fn from(e: TranspositionError) -> Self {
        Self::Transposition(e)
    }
}
