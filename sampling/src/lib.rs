//! Deterministic randomness for the sparse ring workspace.
//!
//! [`Source`] wraps a seeded ChaCha8 stream; [`distributions`] draws the
//! polynomial shapes the ring engine consumes (uniform dense coefficients,
//! fixed-weight sparse ternary index sets and product-form index blocks).

pub mod distributions;
pub mod source;

pub use distributions::*;
pub use source::*;
