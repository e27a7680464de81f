//! Strength-gated, per-tier permutation stages.
//!
//! Each tier has exactly one stage. A stage runs only when the strength
//! enables it; otherwise the tier passes through unchanged. Every stage
//! has an exact inverse used by the decoder:
//!
//! | Tier | Stage | Enabled at | Inverse |
//! |------|-------|------------|---------|
//! | Core | [`reverse_core`] | medium | itself |
//! | Ring | [`swirl_ring`] | strong | [`unswirl_ring`] |
//! | Outer | [`swap_pairs`] | extreme | itself |

use gyre_core::{Strength, Tier};
use smallvec::SmallVec;
use tracing::trace;

/// Reverse the sequence in place. An involution.
pub fn reverse_core<T>(buf: &mut [T]) {
    buf.reverse();
}

/// Swap each adjacent pair `(2k, 2k + 1)` in place.
///
/// A trailing unpaired element stays where it is. An involution.
pub fn swap_pairs<T>(buf: &mut [T]) {
    for pair in buf.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}

/// Interleave the first half with the reversed second half.
///
/// The first half holds `ceil(n / 2)` elements. Output alternates
/// `first[i]`, `second[len2 - 1 - i]` until both halves are exhausted, so
/// first-half elements land on even indices and second-half elements on
/// odd indices.
pub fn swirl_ring<T: Clone>(buf: &[T]) -> Vec<T> {
    let (first, second) = buf.split_at(buf.len().div_ceil(2));
    let mut out = Vec::with_capacity(buf.len());
    for (i, item) in first.iter().enumerate() {
        out.push(item.clone());
        if i < second.len() {
            out.push(second[second.len() - 1 - i].clone());
        }
    }
    out
}

/// Inverse of [`swirl_ring`].
///
/// Even indices rebuild the first half in order; odd indices rebuild the
/// second half back to front.
pub fn unswirl_ring<T: Clone>(buf: &[T]) -> Vec<T> {
    let mut first = Vec::with_capacity(buf.len().div_ceil(2));
    let mut second = Vec::with_capacity(buf.len() / 2);
    for (i, item) in buf.iter().enumerate() {
        if i % 2 == 0 {
            first.push(item.clone());
        } else {
            second.push(item.clone());
        }
    }
    second.reverse();
    first.extend(second);
    first
}

/// Applies or inverts the stages enabled by a [`Strength`].
///
/// Operates on one tier's owned buffer at a time; tiers share no state.
///
/// # Examples
///
/// ```
/// use gyre_cipher::TierPermuter;
/// use gyre_core::{Strength, Tier};
///
/// let permuter = TierPermuter::new(Strength::Strong);
/// let mut ring: Vec<char> = "LOOL".chars().collect();
/// permuter.apply(Tier::Ring, &mut ring);
/// assert_eq!(ring.iter().collect::<String>(), "LLOO");
/// permuter.invert(Tier::Ring, &mut ring);
/// assert_eq!(ring.iter().collect::<String>(), "LOOL");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierPermuter {
    strength: Strength,
}

impl TierPermuter {
    /// Permuter for the given strength.
    pub fn new(strength: Strength) -> Self {
        Self { strength }
    }

    /// The strength this permuter was built with.
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Whether the stage for `tier` runs at this strength.
    pub fn is_active(&self, tier: Tier) -> bool {
        match tier {
            Tier::Core => self.strength.reverses_core(),
            Tier::Ring => self.strength.swirls_ring(),
            Tier::Outer => self.strength.swaps_outer(),
        }
    }

    /// Tiers whose stage runs at this strength, in ciphertext order.
    pub fn active_stages(&self) -> SmallVec<[Tier; 3]> {
        Tier::ALL
            .into_iter()
            .filter(|&t| self.is_active(t))
            .collect()
    }

    /// Permute one tier's sequence in place.
    pub fn apply<T: Clone>(&self, tier: Tier, buf: &mut Vec<T>) {
        if !self.is_active(tier) {
            return;
        }
        trace!(%tier, len = buf.len(), "applying tier stage");
        match tier {
            Tier::Core => reverse_core(buf),
            Tier::Ring => *buf = swirl_ring(buf.as_slice()),
            Tier::Outer => swap_pairs(buf),
        }
    }

    /// Undo [`apply`](Self::apply) for one tier, in place.
    pub fn invert<T: Clone>(&self, tier: Tier, buf: &mut Vec<T>) {
        if !self.is_active(tier) {
            return;
        }
        trace!(%tier, len = buf.len(), "inverting tier stage");
        match tier {
            Tier::Core => reverse_core(buf),
            Tier::Ring => *buf = unswirl_ring(buf.as_slice()),
            Tier::Outer => swap_pairs(buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn s(v: &[char]) -> String {
        v.iter().collect()
    }

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn reverse_small_lengths() {
        let mut empty: Vec<char> = vec![];
        reverse_core(&mut empty);
        assert!(empty.is_empty());

        let mut one = chars("A");
        reverse_core(&mut one);
        assert_eq!(s(&one), "A");

        let mut two = chars("AB");
        reverse_core(&mut two);
        assert_eq!(s(&two), "BA");
    }

    #[test]
    fn swap_pairs_leaves_trailing_element() {
        let mut odd = chars("ABCDE");
        swap_pairs(&mut odd);
        assert_eq!(s(&odd), "BADCE");

        let mut even = chars("ABCD");
        swap_pairs(&mut even);
        assert_eq!(s(&even), "BADC");

        let mut two = chars("AB");
        swap_pairs(&mut two);
        assert_eq!(s(&two), "BA");

        let mut one = chars("A");
        swap_pairs(&mut one);
        assert_eq!(s(&one), "A");
    }

    #[test]
    fn swirl_examples() {
        assert_eq!(s(&swirl_ring::<char>(&[])), "");
        assert_eq!(s(&swirl_ring(&chars("A"))), "A");
        assert_eq!(s(&swirl_ring(&chars("AB"))), "AB");
        // first = ABC, second = DE -> A E B D C
        assert_eq!(s(&swirl_ring(&chars("ABCDE"))), "AEBDC");
        // first = ABC, second = DEF -> A F B E C D
        assert_eq!(s(&swirl_ring(&chars("ABCDEF"))), "AFBECD");
    }

    #[test]
    fn unswirl_examples() {
        assert_eq!(s(&unswirl_ring(&chars("AEBDC"))), "ABCDE");
        assert_eq!(s(&unswirl_ring(&chars("AFBECD"))), "ABCDEF");
        assert_eq!(s(&unswirl_ring::<char>(&[])), "");
    }

    #[test]
    fn swirl_inverts_for_lengths_0_to_20() {
        for n in 0..=20usize {
            let seq: Vec<usize> = (0..n).collect();
            assert_eq!(unswirl_ring(&swirl_ring(&seq)), seq, "length {n}");
        }
    }

    #[test]
    fn stages_gated_by_strength() {
        let stages = |st| TierPermuter::new(st).active_stages().into_vec();
        assert_eq!(stages(Strength::Weak), vec![]);
        assert_eq!(stages(Strength::Medium), vec![Tier::Core]);
        assert_eq!(stages(Strength::Strong), vec![Tier::Core, Tier::Ring]);
        assert_eq!(
            stages(Strength::Extreme),
            vec![Tier::Core, Tier::Ring, Tier::Outer]
        );
    }

    #[test]
    fn inactive_stage_is_identity() {
        let permuter = TierPermuter::new(Strength::Medium);
        let mut ring = chars("ABCDE");
        permuter.apply(Tier::Ring, &mut ring);
        assert_eq!(s(&ring), "ABCDE");
        let mut outer = chars("ABCD");
        permuter.apply(Tier::Outer, &mut outer);
        assert_eq!(s(&outer), "ABCD");
        let mut core = chars("ABC");
        permuter.apply(Tier::Core, &mut core);
        assert_eq!(s(&core), "CBA");
    }

    #[test]
    fn apply_then_invert_every_tier_and_strength() {
        for strength in Strength::ALL {
            let permuter = TierPermuter::new(strength);
            for tier in Tier::ALL {
                for n in [0usize, 1, 2, 3, 4, 7, 8] {
                    let original: Vec<usize> = (0..n).collect();
                    let mut buf = original.clone();
                    permuter.apply(tier, &mut buf);
                    permuter.invert(tier, &mut buf);
                    assert_eq!(buf, original, "{strength} {tier} len {n}");
                }
            }
        }
    }

    proptest! {
        #[test]
        fn reverse_is_involution(v in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut w = v.clone();
            reverse_core(&mut w);
            reverse_core(&mut w);
            prop_assert_eq!(w, v);
        }

        #[test]
        fn swap_pairs_is_involution(v in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut w = v.clone();
            swap_pairs(&mut w);
            swap_pairs(&mut w);
            prop_assert_eq!(w, v);
        }

        #[test]
        fn swirl_is_a_permutation(n in 0usize..64) {
            let seq: Vec<usize> = (0..n).collect();
            let mut swirled = swirl_ring(&seq);
            prop_assert_eq!(unswirl_ring(&swirled), seq.clone());
            swirled.sort_unstable();
            prop_assert_eq!(swirled, seq);
        }
    }
}
