//! Core types and traits for the Gyre spiral transposition.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the grid geometry, the cipher and the container:
//! strength levels, distance tiers, the encoded output pair, message
//! normalization, error types, and the [`Transposition`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod message;
pub mod strength;
pub mod tier;
pub mod traits;

pub use error::TranspositionError;
pub use message::{normalize_message, Encoded};
pub use strength::Strength;
pub use tier::{Tier, TierLengths};
pub use traits::Transposition;
