//! Message normalization and the encoded output pair.

use crate::tier::TierLengths;

/// Normalize a message for placement on the grid.
///
/// Every whitespace character is dropped and the remainder is uppercased.
/// The step is lossy: casing and spacing are not restored on decode.
/// Symbols outside `A-Z` are kept as-is (after case mapping) and placed
/// like any other character.
///
/// # Examples
///
/// ```
/// use gyre_core::normalize_message;
///
/// let chars = normalize_message("Hello  world\n!");
/// assert_eq!(chars.iter().collect::<String>(), "HELLOWORLD!");
/// ```
pub fn normalize_message(message: &str) -> Vec<char> {
    message
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Ciphertext together with the tier lengths needed to decode it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Encoded {
    /// Permuted tiers concatenated core, ring, outer.
    pub ciphertext: String,
    /// Character count contributed by each tier.
    pub tiers: TierLengths,
}

impl Encoded {
    /// Pair a ciphertext with its tier lengths.
    pub fn new(ciphertext: impl Into<String>, tiers: TierLengths) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            tiers,
        }
    }

    /// Number of characters in the ciphertext.
    pub fn char_len(&self) -> usize {
        self.ciphertext.chars().count()
    }
}
