//! Concentric distance tiers and their lengths.

use std::fmt;

/// One of the three distance bands around the grid center.
///
/// Variants are declared in ciphertext order: core characters come
/// first, then ring, then outer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Distance <= 1.0 from the center.
    Core,
    /// 1.0 < distance <= 2.0.
    Ring,
    /// Distance > 2.0.
    Outer,
}

impl Tier {
    /// All tiers in ciphertext order.
    pub const ALL: [Tier; 3] = [Tier::Core, Tier::Ring, Tier::Outer];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => f.write_str("core"),
            Self::Ring => f.write_str("ring"),
            Self::Outer => f.write_str("outer"),
        }
    }
}

/// Number of characters each tier contributes to a ciphertext.
///
/// Decoding needs these to split the ciphertext back into tiers. They are
/// also re-derivable from the message length alone, which is how a decoder
/// checks that a declaration is consistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TierLengths {
    /// Characters in the core tier.
    pub core: usize,
    /// Characters in the ring tier.
    pub ring: usize,
    /// Characters in the outer tier.
    pub outer: usize,
}

impl TierLengths {
    /// All three tiers empty; produced for degenerate messages.
    pub const EMPTY: TierLengths = TierLengths {
        core: 0,
        ring: 0,
        outer: 0,
    };

    /// Build from the three lengths in ciphertext order.
    pub fn new(core: usize, ring: usize, outer: usize) -> Self {
        Self { core, ring, outer }
    }

    /// Length of a single tier.
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Core => self.core,
            Tier::Ring => self.ring,
            Tier::Outer => self.outer,
        }
    }

    /// Sum of all three tiers, saturating on overflow.
    pub fn total(&self) -> usize {
        self.core
            .saturating_add(self.ring)
            .saturating_add(self.outer)
    }

    /// `true` when every tier is empty.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for TierLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.core, self.ring, self.outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_order_matches_ciphertext_order() {
        let mut tiers = [Tier::Outer, Tier::Core, Tier::Ring];
        tiers.sort();
        assert_eq!(tiers, Tier::ALL);
    }

    #[test]
    fn lengths_accessors() {
        let t = TierLengths::new(2, 4, 4);
        assert_eq!(t.get(Tier::Core), 2);
        assert_eq!(t.get(Tier::Ring), 4);
        assert_eq!(t.get(Tier::Outer), 4);
        assert_eq!(t.total(), 10);
        assert!(!t.is_empty());
        assert_eq!(t.to_string(), "2,4,4");
    }

    #[test]
    fn empty_lengths() {
        assert!(TierLengths::EMPTY.is_empty());
        assert_eq!(TierLengths::default(), TierLengths::EMPTY);
    }

    #[test]
    fn total_saturates() {
        let t = TierLengths::new(usize::MAX, 1, 1);
        assert_eq!(t.total(), usize::MAX);
    }
}
