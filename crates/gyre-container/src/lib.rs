//! Text container for gravitational spiral ciphertexts.
//!
//! A ciphertext alone cannot be decoded: the decoder also needs the
//! strength and the tier lengths. This crate persists all three, plus a
//! checksum, in a small line-oriented text file.
//!
//! # Architecture
//!
//! - [`Envelope`] pairs a ciphertext with its decoding parameters
//! - [`codec`] writes and parses the text form against any `Write` / `Read`
//! - [`write_file`] and [`read_file`] wrap the codec in buffered file I/O
//! - [`seal_file`] and [`open_file`] go from a plaintext file to a container
//!   file and back
//! - [`ciphertext_checksum`] guards against accidental corruption
//!
//! # Format
//!
//! ```text
//! GRAVITY_SPIRAL_CIPHER
//! VERSION:1
//! STRENGTH:strong
//! LENGTH:10
//! TIERS:2,4,4
//! CHECKSUM:<16 hex digits>
//! ---
//! RWLLOOHELD
//! ```
//!
//! Header fields appear in exactly this order. Degenerate messages (zero or
//! one character) are written with `TIERS:0,0,0`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod file;
pub mod hash;
pub mod types;

pub use codec::{decode_envelope, encode_envelope, encode_to_string, parse_envelope};
pub use error::ContainerError;
pub use file::{open_file, read_file, seal_file, write_file};
pub use hash::ciphertext_checksum;
pub use types::Envelope;

/// Marker line at the start of every container.
pub const MAGIC: &str = "GRAVITY_SPIRAL_CIPHER";

/// Line separating the header from the ciphertext.
pub const HEADER_END: &str = "---";

/// Current text format version.
///
/// History:
/// - v1: marker, version, strength, length, tiers, checksum, separator, body
pub const FORMAT_VERSION: u8 = 1;
