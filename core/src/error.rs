//! Errors raised while configuring an engine or running the self-test.

use sparse_ring_backend::RingError;
use thiserror::Error;

/// Invalid parameter set or engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The ring layer rejected the degree or the requested backend.
    #[error(transparent)]
    Ring(#[from] RingError),

    /// A product-form factor needs more distinct positions than the ring has.
    #[error("factor p{factor} of weight {weight} does not fit in N = {n}")]
    WeightTooLarge { factor: usize, weight: usize, n: usize },

    #[error("unknown parameter set: {0}")]
    UnknownParams(String),

    #[error("unknown backend {0:?}: expected one of reference, simd, auto")]
    UnknownBackend(String),
}

/// Failure of a self-test check.
///
/// [`SelfTestError::Equivalence`] means the accelerated backend disagrees
/// with the portable one and must not be used in this build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelfTestError {
    #[error("equivalence check {check} failed on {backend}: {mismatches} mismatches")]
    Equivalence {
        check: &'static str,
        backend: &'static str,
        mismatches: usize,
    },

    #[error("known-answer vector {vector} on {backend}: coefficient {position} is {actual:#x}, expected {expected:#x}")]
    KnownAnswer {
        vector: &'static str,
        backend: &'static str,
        position: usize,
        expected: u16,
        actual: u16,
    },

    #[error(transparent)]
    Ring(#[from] RingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
