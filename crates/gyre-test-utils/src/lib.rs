//! Test utilities and mock transpositions for Gyre development.
//!
//! Provides mock implementations of [`Transposition`], message fixtures,
//! and compliance assertions that any scheme must pass.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gyre_core::{normalize_message, Encoded, TierLengths, Transposition, TranspositionError};
use indexmap::IndexMap;

pub use fixtures::{
    alphabet_message, distinct_message, HELLOWORLD_TIERS, HELLOWORLD_VECTORS, SAMPLE_MESSAGES,
};

/// Mock scheme that reverses the normalized message.
///
/// Reports the whole message as a single core tier. Useful for exercising
/// code that only holds a `dyn Transposition`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseTransposition;

impl Transposition for ReverseTransposition {
    fn name(&self) -> &str {
        "reverse"
    }

    fn encode(&self, message: &str) -> Result<Encoded, TranspositionError> {
        let chars = normalize_message(message);
        let len = chars.len();
        Ok(Encoded::new(
            chars.into_iter().rev().collect::<String>(),
            TierLengths::new(len, 0, 0),
        ))
    }

    fn decode(&self, encoded: &Encoded) -> Result<String, TranspositionError> {
        if encoded.tiers.total() != encoded.char_len() {
            return Err(TranspositionError::InvalidLength {
                reason: format!(
                    "tiers sum to {} but ciphertext has {} characters",
                    encoded.tiers.total(),
                    encoded.char_len()
                ),
            });
        }
        Ok(encoded.ciphertext.chars().rev().collect())
    }
}

// ── Compliance assertions ──────────────────────────────────────

/// Character counts in first-seen order.
pub fn char_histogram(text: &str) -> IndexMap<char, usize> {
    let mut counts = IndexMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Assert `scheme` decodes its own encoding of `message` back to the
/// normalized message, and return the encoding for further checks.
pub fn assert_round_trip(scheme: &dyn Transposition, message: &str) -> Encoded {
    let expected: String = normalize_message(message).into_iter().collect();
    let encoded = scheme
        .encode(message)
        .unwrap_or_else(|e| panic!("{}: encode({message:?}) failed: {e}", scheme.name()));
    let decoded = scheme
        .decode(&encoded)
        .unwrap_or_else(|e| panic!("{}: decode of {message:?} failed: {e}", scheme.name()));
    assert_eq!(
        decoded,
        expected,
        "{}: round trip of {message:?} via {:?}",
        scheme.name(),
        encoded.ciphertext
    );
    encoded
}

/// Assert the ciphertext holds exactly the normalized message's characters.
pub fn assert_is_permutation(message: &str, encoded: &Encoded) {
    let normalized: String = normalize_message(message).into_iter().collect();
    let mut expected: Vec<_> = char_histogram(&normalized).into_iter().collect();
    let mut actual: Vec<_> = char_histogram(&encoded.ciphertext).into_iter().collect();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(
        actual, expected,
        "ciphertext {:?} is not a permutation of {normalized:?}",
        encoded.ciphertext
    );
}

/// Assert the tier lengths account for every ciphertext character.
pub fn assert_tiers_cover(encoded: &Encoded) {
    let len = encoded.char_len();
    if len <= 1 {
        assert!(
            encoded.tiers.is_empty() || encoded.tiers.total() == len,
            "degenerate tiers {} for length {len}",
            encoded.tiers
        );
    } else {
        assert_eq!(
            encoded.tiers.total(),
            len,
            "tiers {} do not cover {len} characters",
            encoded.tiers
        );
    }
}

/// Run every compliance check over [`SAMPLE_MESSAGES`].
pub fn run_full_compliance(scheme: &dyn Transposition) {
    for message in SAMPLE_MESSAGES {
        let encoded = assert_round_trip(scheme, message);
        assert_is_permutation(message, &encoded);
        assert_tiers_cover(&encoded);
        assert_eq!(
            scheme.encode(message).ok(),
            Some(encoded),
            "{}: encode of {message:?} is not deterministic",
            scheme.name()
        );
    }
}
