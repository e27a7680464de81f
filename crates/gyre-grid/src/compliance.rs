//! Layout and tiering compliance test helpers.
//!
//! These functions verify the invariants the cipher relies on: the spiral
//! visits every cell exactly once, is deterministic, agrees with its
//! arithmetic rank, and the radial split partitions the visited cells.

use crate::radial::RadialClassifier;
use crate::spiral::{Position, SpiralLayout};
use indexmap::IndexSet;

/// Assert that `positions()` returns exactly `cell_count` unique in-bounds cells.
pub fn assert_spiral_complete(layout: &SpiralLayout) {
    let positions = layout.positions();
    assert_eq!(
        positions.len(),
        layout.cell_count(),
        "spiral length ({}) != cell_count ({}) for side {}",
        positions.len(),
        layout.cell_count(),
        layout.side()
    );
    let unique: IndexSet<_> = positions.iter().collect();
    assert_eq!(
        unique.len(),
        layout.cell_count(),
        "spiral has duplicates for side {}",
        layout.side()
    );
    let n = layout.side();
    for pos in &positions {
        assert!(
            pos.row < n && pos.col < n,
            "{pos} out of bounds for side {n}"
        );
    }
}

/// Assert that two calls to `positions` return the same sequence.
pub fn assert_spiral_deterministic(layout: &SpiralLayout) {
    assert_eq!(
        layout.positions(),
        layout.positions(),
        "spiral order is non-deterministic"
    );
}

/// Assert that `spiral_rank` inverts `positions`.
pub fn assert_rank_inverts_positions(layout: &SpiralLayout) {
    for (i, pos) in layout.positions().into_iter().enumerate() {
        assert_eq!(
            layout.spiral_rank(pos),
            Some(i),
            "spiral_rank({pos}) disagrees with positions() for side {}",
            layout.side()
        );
    }
}

/// Assert that `split_by_tier` covers `0..positions.len()` exactly once,
/// in ascending order within each tier, and agrees with `classify`.
pub fn assert_split_partitions(radial: &RadialClassifier, positions: &[Position]) {
    let split = radial.split_by_tier(positions);
    let mut seen: IndexSet<usize> = IndexSet::new();
    for tier in gyre_core::Tier::ALL {
        let indices = split.indices(tier);
        assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "{tier} indices not in spiral order"
        );
        for &i in indices {
            assert!(seen.insert(i), "index {i} assigned to more than one tier");
            assert_eq!(radial.classify(positions[i]), tier);
        }
    }
    assert_eq!(
        seen.len(),
        positions.len(),
        "split covers {} of {} positions",
        seen.len(),
        positions.len()
    );
}

/// Run all layout checks, plus the tier partition over the full grid.
pub fn run_full_compliance(layout: &SpiralLayout) {
    assert_spiral_complete(layout);
    assert_spiral_deterministic(layout);
    assert_rank_inverts_positions(layout);
    let radial = RadialClassifier::new(layout.side());
    assert_split_partitions(&radial, &layout.positions());
}
