//! Ciphertext checksum.
//!
//! FNV-1a over the UTF-8 bytes of the ciphertext. Detects accidental
//! corruption of a stored container; it is not a MAC and offers no
//! protection against deliberate tampering.

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Checksum recorded in the `CHECKSUM` header line.
///
/// Returns `FNV_OFFSET` for the empty ciphertext.
pub fn ciphertext_checksum(ciphertext: &str) -> u64 {
    ciphertext.bytes().fold(FNV_OFFSET, fnv1a_byte)
}
