//! The gravitational spiral transposition.
//!
//! - [`permute`]: per-tier stages and the strength-gated [`TierPermuter`]
//! - [`gravity`]: [`encode`](gravity::encode) / [`decode`](gravity::decode)
//!   and the [`GravitySpiralCipher`] implementation of
//!   [`Transposition`](gyre_core::Transposition)
//! - [`config`]: [`CipherConfig`] selecting a scheme behind
//!   `Box<dyn Transposition>`
//!
//! All operations are synchronous and stateless. Library code emits
//! `tracing` events at debug and trace level; install a subscriber in the
//! embedding application to see them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod gravity;
pub mod permute;

pub use config::{CipherConfig, ConfigError, SchemeKind};
pub use gravity::{expected_tier_lengths, GravitySpiralCipher};
pub use permute::TierPermuter;
