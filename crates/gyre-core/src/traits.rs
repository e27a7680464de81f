//! The scheme-level capability shared by every transposition variant.

use crate::error::TranspositionError;
use crate::message::Encoded;

/// A reversible, key-free transposition scheme.
///
/// Variants are selected at runtime and held as `Box<dyn Transposition>`,
/// so the trait stays object safe. Implementations are stateless between
/// calls: the same input always yields the same output, and calls on
/// independent inputs may run concurrently.
pub trait Transposition: Send + Sync {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &str;

    /// Normalize and permute `message`.
    fn encode(&self, message: &str) -> Result<Encoded, TranspositionError>;

    /// Invert [`encode`](Self::encode), returning the normalized message.
    fn decode(&self, encoded: &Encoded) -> Result<String, TranspositionError>;
}
