//! Inward spiral traversal of a square grid.
//!
//! The spiral is the only ordering the cipher relies on: characters are
//! placed along it at encode time, and decode replays the very same
//! generator to learn where each character came from. There is no
//! separate reverse walk.

use std::fmt;

use crate::error::GridError;
use crate::sizer::side_length;

/// A `(row, col)` cell of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: u32,
    /// Zero-based column, left to right.
    pub col: u32,
}

impl Position {
    /// Build a position from row and column.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Position {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Walk a `rows x cols` rectangle from the outer boundary inward.
///
/// Each layer emits its top row left to right, right column top to bottom,
/// bottom row right to left, then left column bottom to top. Corners are
/// emitted once. A layer that has collapsed to a single row or column is
/// emitted once, in its forward direction.
///
/// Returns `rows * cols` positions, each cell exactly once. A zero
/// dimension yields an empty walk.
pub fn spiral_rect(rows: u32, cols: u32) -> Vec<Position> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(rows as usize * cols as usize);

    // Signed bounds: `bottom`/`right` step below `top`/`left` on exit.
    let (mut top, mut left) = (0i64, 0i64);
    let (mut bottom, mut right) = (rows as i64 - 1, cols as i64 - 1);
    let at = |r: i64, c: i64| Position::new(r as u32, c as u32);

    while top <= bottom && left <= right {
        for c in left..=right {
            out.push(at(top, c));
        }
        for r in top + 1..=bottom {
            out.push(at(r, right));
        }
        if top < bottom {
            for c in (left..right).rev() {
                out.push(at(bottom, c));
            }
        }
        if left < right {
            for r in (top + 1..bottom).rev() {
                out.push(at(r, left));
            }
        }
        top += 1;
        left += 1;
        bottom -= 1;
        right -= 1;
    }
    out
}

/// Spiral ordering of an `N x N` grid.
///
/// # Examples
///
/// ```
/// use gyre_grid::{Position, SpiralLayout};
///
/// let layout = SpiralLayout::new(3).unwrap();
/// let order: Vec<(u32, u32)> = layout
///     .positions()
///     .into_iter()
///     .map(|p| (p.row, p.col))
///     .collect();
/// assert_eq!(
///     order,
///     vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (1, 1)]
/// );
/// assert_eq!(layout.spiral_rank(Position::new(1, 1)), Some(8));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpiralLayout {
    side: u32,
}

impl SpiralLayout {
    /// Largest supported side: the largest `N` with `N * N <= i32::MAX`.
    pub const MAX_SIDE: u32 = 46_340;

    /// Create a layout for an `side x side` grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for a zero side, or
    /// `Err(GridError::DimensionTooLarge)` above [`MAX_SIDE`](Self::MAX_SIDE).
    pub fn new(side: u32) -> Result<Self, GridError> {
        if side == 0 {
            return Err(GridError::EmptyGrid);
        }
        if side > Self::MAX_SIDE {
            return Err(GridError::DimensionTooLarge {
                name: "side",
                value: side as u64,
                max: Self::MAX_SIDE as u64,
            });
        }
        Ok(Self { side })
    }

    /// Create the minimal layout able to hold `message_len` characters.
    pub fn for_message_len(message_len: usize) -> Result<Self, GridError> {
        let side = side_length(message_len);
        let side = u32::try_from(side).map_err(|_| GridError::DimensionTooLarge {
            name: "side",
            value: side as u64,
            max: Self::MAX_SIDE as u64,
        })?;
        Self::new(side)
    }

    /// Side length `N`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total number of cells, `N * N`.
    pub fn cell_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    /// All `N * N` positions in spiral order.
    pub fn positions(&self) -> Vec<Position> {
        spiral_rect(self.side, self.side)
    }

    /// The first `len` positions: where a `len`-character message sits.
    ///
    /// `len` is capped at [`cell_count`](Self::cell_count).
    pub fn occupied(&self, len: usize) -> Vec<Position> {
        let mut positions = self.positions();
        positions.truncate(len);
        positions
    }

    /// Index of `pos` in the spiral order, computed arithmetically.
    ///
    /// Returns `None` if `pos` is outside the grid. Satisfies
    /// `positions()[spiral_rank(p)] == p` for every cell.
    pub fn spiral_rank(&self, pos: Position) -> Option<usize> {
        let n = self.side as u64;
        let (r, c) = (pos.row as u64, pos.col as u64);
        if r >= n || c >= n {
            return None;
        }
        let layer = r.min(c).min(n - 1 - r).min(n - 1 - c);
        // Cells in every layer outside this one: n^2 - (n - 2L)^2.
        let before = 4 * layer * (n - layer);
        let (lo, hi) = (layer, n - 1 - layer);
        let span = hi - lo;
        let within = if r == lo {
            c - lo
        } else if c == hi {
            span + (r - lo)
        } else if r == hi {
            2 * span + (hi - c)
        } else {
            3 * span + (hi - r)
        };
        Some((before + within) as usize)
    }

    /// Like [`spiral_rank`](Self::spiral_rank), reporting out-of-bounds as an error.
    pub fn try_spiral_rank(&self, pos: Position) -> Result<usize, GridError> {
        self.spiral_rank(pos).ok_or(GridError::PositionOutOfBounds {
            position: pos,
            side: self.side,
        })
    }
}
