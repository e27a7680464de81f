//! The persisted envelope.

use gyre_cipher::gravity;
use gyre_core::{Strength, TierLengths};

use crate::error::ContainerError;
use crate::hash::ciphertext_checksum;

/// A ciphertext together with everything needed to decode it.
///
/// The strength is not recoverable from the ciphertext, so it travels in
/// the header alongside the tier lengths.
///
/// # Examples
///
/// ```
/// use gyre_container::Envelope;
/// use gyre_core::{Strength, TierLengths};
///
/// let envelope = Envelope::seal("hello world", Strength::Strong).unwrap();
/// assert_eq!(envelope.ciphertext, "RWLLOOHELD");
/// assert_eq!(envelope.original_length, 10);
/// assert_eq!(envelope.tiers, TierLengths::new(2, 4, 4));
/// assert_eq!(envelope.open().unwrap(), "HELLOWORLD");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Strength the ciphertext was produced with.
    pub strength: Strength,
    /// Character count of the normalized message.
    pub original_length: usize,
    /// Tier lengths reported by the encoder.
    pub tiers: TierLengths,
    /// The transposed characters.
    pub ciphertext: String,
}

impl Envelope {
    /// Encode `message` and wrap the result.
    pub fn seal(message: &str, strength: Strength) -> Result<Self, ContainerError> {
        let encoded = gravity::encode(message, strength)?;
        Ok(Self {
            strength,
            original_length: encoded.char_len(),
            tiers: encoded.tiers,
            ciphertext: encoded.ciphertext,
        })
    }

    /// Decode the ciphertext back to the normalized message.
    pub fn open(&self) -> Result<String, ContainerError> {
        Ok(gravity::decode(&self.ciphertext, self.tiers, self.strength)?)
    }

    /// Checksum of the ciphertext as written to the header.
    pub fn checksum(&self) -> u64 {
        ciphertext_checksum(&self.ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_every_strength_opens() {
        for strength in Strength::ALL {
            let envelope = Envelope::seal("the quick brown fox", strength).unwrap();
            assert_eq!(envelope.strength, strength);
            assert_eq!(envelope.original_length, 16);
            assert_eq!(envelope.tiers.total(), 16);
            assert_eq!(envelope.open().unwrap(), "THEQUICKBROWNFOX");
        }
    }

    #[test]
    fn degenerate_message_has_empty_tiers() {
        let envelope = Envelope::seal(" x ", Strength::Weak).unwrap();
        assert_eq!(envelope.ciphertext, "X");
        assert_eq!(envelope.original_length, 1);
        assert!(envelope.tiers.is_empty());
        assert_eq!(envelope.open().unwrap(), "X");
    }

    #[test]
    fn tampered_tiers_fail_to_open() {
        let mut envelope = Envelope::seal("HELLOWORLD", Strength::Strong).unwrap();
        envelope.tiers = TierLengths::new(3, 3, 4);
        assert!(matches!(
            envelope.open(),
            Err(ContainerError::Transposition(_))
        ));
    }
}
