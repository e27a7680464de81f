//! Benchmark profiles and utilities for the Gyre spiral transposition.
//!
//! Provides pre-built message profiles for benchmarking:
//!
//! - [`reference_message`]: 100x100 grid (10K characters)
//! - [`stress_message`]: 316x316 grid (~100K characters)
//! - [`seeded_message`]: deterministic pseudo-random text via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Characters drawn by [`seeded_message`]: letters, digits, and a few
/// symbols, so normalization keeps every one.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,!?";

/// Reference profile: exactly fills a 100x100 grid.
pub fn reference_message(seed: u64) -> String {
    seeded_message(100 * 100, seed)
}

/// Stress profile: exactly fills a 316x316 grid (~100K characters).
pub fn stress_message(seed: u64) -> String {
    seeded_message(316 * 316, seed)
}

/// Generate a deterministic `len`-character normalized message.
///
/// A 64-bit LCG keyed on `seed` picks each character, so the same
/// `(len, seed)` always yields the same text.
pub fn seeded_message(len: usize, seed: u64) -> String {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            char::from(ALPHABET[((state >> 33) % ALPHABET.len() as u64) as usize])
        })
        .collect()
}
