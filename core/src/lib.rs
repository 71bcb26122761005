//! # sparse-ring-core
//!
//! Ties the ring-arithmetic HAL of `sparse-ring-backend` to concrete NTRU
//! parameter sets.
//!
//! * [`RingParams`]: ring degree, coefficient modulus and product-form
//!   weights, with the standard presets.
//! * [`RingEngine`]: one parameter set bound to a backend picked at runtime
//!   ([`BackendKind`], optionally from the `SPARSE_RING_BACKEND` environment
//!   variable).
//! * [`run_self_test`]: exhaustive `mod 3`, the fixed known-answer vectors
//!   and randomized cross-backend equivalence.

mod engine;
mod error;
mod params;

pub use engine::*;
pub use error::*;
pub use params::*;
pub use self_test::*;
