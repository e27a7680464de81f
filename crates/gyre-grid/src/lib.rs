//! Grid geometry for the Gyre spiral transposition.
//!
//! Everything here is a pure function of the message length, so encode
//! and decode recompute identical geometry without storing coordinates.
//!
//! - [`side_length`]: minimal square side holding a message
//! - [`SpiralLayout`]: inward spiral ordering of the grid cells
//! - [`RadialClassifier`]: core / ring / outer tiering by distance to the
//!   integer center, and the spiral-ordered [`TierSplit`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod radial;
pub mod sizer;
pub mod spiral;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use radial::{RadialClassifier, TierSplit, CORE_RADIUS, RING_RADIUS};
pub use sizer::side_length;
pub use spiral::{spiral_rect, Position, SpiralLayout};
