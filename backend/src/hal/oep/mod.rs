//! # Open extension points
//!
//! Every trait here is `unsafe` to implement: the safe layer in
//! [`crate::hal::delegates`] validates degrees, buffer lengths, index ranges
//! and scratch sizes, then calls the `*_impl` function with raw slices that
//! satisfy the documented preconditions. An implementation may rely on
//! those preconditions without rechecking them and must produce results
//! bit-identical to the portable kernels in [`crate::reference`].

mod module;
mod ring_mul;

pub use module::*;
pub use ring_mul::*;
