//! The gravitational spiral transposition.
//!
//! Encode pipeline:
//!
//! 1. normalize (drop whitespace, uppercase)
//! 2. size the grid and lay the characters along the inward spiral
//! 3. bucket the occupied cells into core / ring / outer tiers, keeping
//!    spiral order inside each tier
//! 4. permute each tier according to strength
//! 5. concatenate core + ring + outer
//!
//! Decode recomputes steps 2 and 3 from the message length alone, inverts
//! each tier and scatters the characters back to their spiral indices.
//! Spiral index `i` holds input character `i`, so scattering by spiral
//! index restores the message directly; no grid is materialized.

use gyre_core::{
    normalize_message, Encoded, Strength, Tier, TierLengths, Transposition, TranspositionError,
};
use gyre_grid::{RadialClassifier, SpiralLayout, TierSplit};
use tracing::debug;

use crate::permute::TierPermuter;

/// Geometry shared by encode and decode for a message of a given length.
struct Geometry {
    side: u32,
    split: TierSplit,
}

impl Geometry {
    fn for_len(len: usize) -> Result<Self, TranspositionError> {
        let layout =
            SpiralLayout::for_message_len(len).map_err(|e| TranspositionError::InvalidLength {
                reason: format!("cannot lay out {len} characters: {e}"),
            })?;
        let occupied = layout.occupied(len);
        let split = RadialClassifier::new(layout.side()).split_by_tier(&occupied);
        Ok(Self {
            side: layout.side(),
            split,
        })
    }
}

/// Tier lengths an `len`-character normalized message produces.
///
/// Degenerate lengths (0 or 1) produce [`TierLengths::EMPTY`], matching
/// what [`encode`] returns for them.
pub fn expected_tier_lengths(len: usize) -> Result<TierLengths, TranspositionError> {
    if len <= 1 {
        return Ok(TierLengths::EMPTY);
    }
    Ok(Geometry::for_len(len)?.split.lengths())
}

/// Encode `message` at the given strength.
///
/// Messages of at most one character after normalization are returned
/// unchanged with empty tier lengths.
///
/// # Examples
///
/// ```
/// use gyre_cipher::gravity;
/// use gyre_core::{Strength, TierLengths};
///
/// let encoded = gravity::encode("hello world", Strength::Strong).unwrap();
/// assert_eq!(encoded.ciphertext, "RWLLOOHELD");
/// assert_eq!(encoded.tiers, TierLengths::new(2, 4, 4));
///
/// let decoded = gravity::decode(&encoded.ciphertext, encoded.tiers, Strength::Strong).unwrap();
/// assert_eq!(decoded, "HELLOWORLD");
/// ```
pub fn encode(message: &str, strength: Strength) -> Result<Encoded, TranspositionError> {
    let chars = normalize_message(message);
    if chars.len() <= 1 {
        debug!(len = chars.len(), "degenerate message passed through");
        return Ok(Encoded::new(
            chars.into_iter().collect::<String>(),
            TierLengths::EMPTY,
        ));
    }

    let geometry = Geometry::for_len(chars.len())?;
    let permuter = TierPermuter::new(strength);
    let mut ciphertext = String::with_capacity(message.len());
    for tier in Tier::ALL {
        let mut buf: Vec<char> = geometry
            .split
            .indices(tier)
            .iter()
            .map(|&i| chars[i])
            .collect();
        permuter.apply(tier, &mut buf);
        ciphertext.extend(buf);
    }

    let tiers = geometry.split.lengths();
    debug!(
        len = chars.len(),
        side = geometry.side,
        %tiers,
        %strength,
        "encoded message"
    );
    Ok(Encoded::new(ciphertext, tiers))
}

/// Decode a ciphertext produced by [`encode`] with the same strength.
///
/// Returns [`TranspositionError::InvalidLength`] when `tiers` does not sum
/// to the ciphertext length, or disagrees with the split recomputed from
/// that length. A wrong strength is not detectable and yields a garbled
/// (but same-length) result.
pub fn decode(
    ciphertext: &str,
    tiers: TierLengths,
    strength: Strength,
) -> Result<String, TranspositionError> {
    let chars: Vec<char> = ciphertext.chars().collect();
    let len = chars.len();

    if len <= 1 {
        if tiers.is_empty() || tiers.total() == len {
            return Ok(ciphertext.to_string());
        }
        return Err(length_mismatch(tiers, len));
    }
    if tiers.total() != len {
        return Err(length_mismatch(tiers, len));
    }

    let geometry = Geometry::for_len(len)?;
    let expected = geometry.split.lengths();
    if expected != tiers {
        return Err(TranspositionError::InvalidLength {
            reason: format!(
                "declared tiers {tiers} do not match the {expected} split of a \
                 {len}-character message"
            ),
        });
    }

    let permuter = TierPermuter::new(strength);
    let mut message = vec!['\0'; len];
    let mut offset = 0;
    for tier in Tier::ALL {
        let end = offset + tiers.get(tier);
        let mut buf = chars[offset..end].to_vec();
        offset = end;
        permuter.invert(tier, &mut buf);
        for (&index, c) in geometry.split.indices(tier).iter().zip(buf) {
            message[index] = c;
        }
    }

    debug!(len, side = geometry.side, %tiers, %strength, "decoded message");
    Ok(message.into_iter().collect())
}

fn length_mismatch(tiers: TierLengths, len: usize) -> TranspositionError {
    TranspositionError::InvalidLength {
        reason: format!(
            "tiers {tiers} sum to {} but ciphertext has {len} characters",
            tiers.total()
        ),
    }
}

/// [`Transposition`] implementation bound to a fixed strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GravitySpiralCipher {
    strength: Strength,
}

impl GravitySpiralCipher {
    /// Name reported by [`Transposition::name`].
    pub const NAME: &'static str = "gravity-spiral";

    /// Cipher operating at `strength`.
    pub fn new(strength: Strength) -> Self {
        Self { strength }
    }

    /// The configured strength.
    pub fn strength(&self) -> Strength {
        self.strength
    }
}

impl Transposition for GravitySpiralCipher {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn encode(&self, message: &str) -> Result<Encoded, TranspositionError> {
        encode(message, self.strength)
    }

    fn decode(&self, encoded: &Encoded) -> Result<String, TranspositionError> {
        decode(&encoded.ciphertext, encoded.tiers, self.strength)
    }
}
