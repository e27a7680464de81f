//! Reusable message fixtures and known-answer vectors.

use gyre_core::{Strength, TierLengths};

/// Messages exercising normalization, odd and even tier sizes, multibyte
/// symbols, and both degenerate lengths.
pub const SAMPLE_MESSAGES: &[&str] = &[
    "",
    "a",
    "ab",
    "abc",
    "hello world",
    "The quick brown fox jumps over the lazy dog",
    "  leading and trailing  ",
    "tabs\tand\nnewlines",
    "0123456789",
    "Ç'EST LA VIE!",
    "ÀÉÎÕÜ ñ ß",
    "spiral-galaxy, 2 arms; 100,000 light years?",
];

/// `HELLOWORLD` ciphertext at each strength. Every one splits `(2, 4, 4)`.
pub const HELLOWORLD_VECTORS: [(Strength, &str); 4] = [
    (Strength::Weak, "WRLOOLHELD"),
    (Strength::Medium, "RWLOOLHELD"),
    (Strength::Strong, "RWLLOOHELD"),
    (Strength::Extreme, "RWLLOOEHDL"),
];

/// Tier split of any 10-character message.
pub const HELLOWORLD_TIERS: TierLengths = TierLengths {
    core: 2,
    ring: 4,
    outer: 4,
};

/// A `len`-character message cycling through `A..=Z`.
///
/// Already normalized, so encode places it unchanged.
pub fn alphabet_message(len: usize) -> String {
    (b'A'..=b'Z').cycle().take(len).map(char::from).collect()
}

/// A `len`-character message of distinct characters.
///
/// Every character is unique, so any misplacement shows up in an equality
/// check. Draws from the CJK block, which is unaffected by uppercasing.
pub fn distinct_message(len: usize) -> String {
    (0..len as u32)
        .filter_map(|i| char::from_u32(0x4E00 + i))
        .collect()
}
