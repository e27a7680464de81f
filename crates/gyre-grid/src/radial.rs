//! Radial tier classification around the grid center.
//!
//! The center is the integer cell `(N / 2, N / 2)`, so for even `N` it
//! sits on the lower-right of the four middle cells. Tier membership
//! depends only on `(N, row, col)`, never on the character placed there.

use gyre_core::{Tier, TierLengths};

use crate::spiral::Position;

/// Largest distance still classified as [`Tier::Core`].
pub const CORE_RADIUS: f64 = 1.0;
/// Largest distance still classified as [`Tier::Ring`].
pub const RING_RADIUS: f64 = 2.0;

// Squared radii; both thresholds are integers so the comparison is exact.
const CORE_RADIUS_SQ: u64 = 1;
const RING_RADIUS_SQ: u64 = 4;

/// Indices into a spiral-ordered position list, grouped by tier.
///
/// Within each tier the indices are ascending, i.e. in spiral order. The
/// three lists together partition `0..len`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TierSplit {
    /// Spiral indices of core cells.
    pub core: Vec<usize>,
    /// Spiral indices of ring cells.
    pub ring: Vec<usize>,
    /// Spiral indices of outer cells.
    pub outer: Vec<usize>,
}

impl TierSplit {
    /// Indices belonging to `tier`.
    pub fn indices(&self, tier: Tier) -> &[usize] {
        match tier {
            Tier::Core => &self.core,
            Tier::Ring => &self.ring,
            Tier::Outer => &self.outer,
        }
    }

    /// Number of indices in each tier.
    pub fn lengths(&self) -> TierLengths {
        TierLengths::new(self.core.len(), self.ring.len(), self.outer.len())
    }

    /// Total number of classified positions.
    pub fn len(&self) -> usize {
        self.core.len() + self.ring.len() + self.outer.len()
    }

    /// `true` if no positions were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies grid cells of an `N x N` grid into distance tiers.
///
/// # Examples
///
/// ```
/// use gyre_core::Tier;
/// use gyre_grid::{Position, RadialClassifier};
///
/// let radial = RadialClassifier::new(4);
/// assert_eq!(radial.center(), Position::new(2, 2));
/// assert_eq!(radial.classify(Position::new(2, 3)), Tier::Core);
/// assert_eq!(radial.classify(Position::new(3, 3)), Tier::Ring);
/// assert_eq!(radial.classify(Position::new(0, 0)), Tier::Outer);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RadialClassifier {
    side: u32,
}

impl RadialClassifier {
    /// Classifier for a grid of the given side length.
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    /// Side length this classifier was built for.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// The integer center cell, `(N / 2, N / 2)`.
    pub fn center(&self) -> Position {
        let c = self.side / 2;
        Position::new(c, c)
    }

    fn squared_distance(&self, pos: Position) -> u64 {
        let c = self.side / 2;
        let dr = pos.row.abs_diff(c) as u64;
        let dc = pos.col.abs_diff(c) as u64;
        dr * dr + dc * dc
    }

    /// Euclidean distance from `pos` to the center.
    pub fn distance(&self, pos: Position) -> f64 {
        (self.squared_distance(pos) as f64).sqrt()
    }

    /// Tier of a single cell.
    pub fn classify(&self, pos: Position) -> Tier {
        match self.squared_distance(pos) {
            d if d <= CORE_RADIUS_SQ => Tier::Core,
            d if d <= RING_RADIUS_SQ => Tier::Ring,
            _ => Tier::Outer,
        }
    }

    /// Tier of every position, in input order.
    pub fn classify_all(&self, positions: &[Position]) -> Vec<Tier> {
        positions.iter().map(|&p| self.classify(p)).collect()
    }

    /// Group spiral indices by tier, preserving spiral order in each group.
    pub fn split_by_tier(&self, positions: &[Position]) -> TierSplit {
        let mut split = TierSplit::default();
        for (i, &pos) in positions.iter().enumerate() {
            match self.classify(pos) {
                Tier::Core => split.core.push(i),
                Tier::Ring => split.ring.push(i),
                Tier::Outer => split.outer.push(i),
            }
        }
        split
    }
}
