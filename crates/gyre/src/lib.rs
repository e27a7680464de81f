//! Gyre: a gravitational spiral transposition.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Gyre sub-crates. For most users, adding `gyre` as a single
//! dependency is sufficient.
//!
//! A message is laid out along an inward spiral on the smallest square
//! grid that holds it. Cells are bucketed by distance to the grid center
//! into core, ring, and outer tiers; each tier is permuted according to
//! the strength and the tiers are concatenated. The scheme is keyless:
//! anyone holding the ciphertext, the tier lengths, and the strength can
//! decode it. It is a puzzle, not a security primitive.
//!
//! # Quick start
//!
//! ```rust
//! use gyre::prelude::*;
//!
//! let cipher = GravitySpiralCipher::new(Strength::Strong);
//! let encoded = cipher.encode("hello world").unwrap();
//! assert_eq!(encoded.ciphertext, "RWLLOOHELD");
//! assert_eq!(encoded.tiers, TierLengths::new(2, 4, 4));
//! assert_eq!(cipher.decode(&encoded).unwrap(), "HELLOWORLD");
//!
//! // Persist alongside the parameters needed to decode it.
//! let envelope = Envelope::seal("hello world", Strength::Strong).unwrap();
//! let text = gyre::container::encode_to_string(&envelope).unwrap();
//! let back = gyre::container::parse_envelope(&text).unwrap();
//! assert_eq!(back.open().unwrap(), "HELLOWORLD");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gyre-core` | Strength, tiers, normalization, errors, the `Transposition` trait |
//! | [`grid`] | `gyre-grid` | Grid sizing, spiral layout, radial tiering |
//! | [`cipher`] | `gyre-cipher` | Tier permutation, encode/decode, scheme configuration |
//! | [`container`] | `gyre-container` | Versioned text container and file helpers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`gyre-core`).
///
/// Contains [`types::Strength`], [`types::TierLengths`], the
/// [`types::Transposition`] trait, and [`types::TranspositionError`].
pub use gyre_core as types;

/// Grid geometry (`gyre-grid`).
///
/// [`grid::SpiralLayout`] orders cells along the inward spiral;
/// [`grid::RadialClassifier`] assigns them to tiers.
pub use gyre_grid as grid;

/// The gravitational spiral transposition (`gyre-cipher`).
///
/// Free functions in [`cipher::gravity`], the
/// [`cipher::GravitySpiralCipher`] scheme, and [`cipher::CipherConfig`].
pub use gyre_cipher as cipher;

/// Persisted ciphertexts (`gyre-container`).
///
/// Wrap ciphertexts in a [`container::Envelope`] and store them with
/// [`container::write_file`].
pub use gyre_container as container;

/// Common imports for typical Gyre usage.
///
/// ```rust
/// use gyre::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use gyre_core::{Encoded, Strength, Tier, TierLengths, Transposition};

    // Errors
    pub use gyre_cipher::ConfigError;
    pub use gyre_container::ContainerError;
    pub use gyre_core::TranspositionError;

    // Schemes
    pub use gyre_cipher::{CipherConfig, GravitySpiralCipher, SchemeKind};

    // Container
    pub use gyre_container::{open_file, read_file, seal_file, write_file, Envelope};
}
