//! x86_64 backend.
//!
//! One group of eight 16-bit accumulators fits exactly one 128-bit register,
//! so each sparse position costs one unaligned load and one packed add or
//! subtract per group instead of eight scalar operations. `mod 3` uses
//! digit folding instead of a division.
//!
//! Support for SSE2 is verified when the module is created; every kernel
//! here is only reachable through a `Module<CpuSimd>` or after that check.

mod conv_sse2;
mod mod3_fold;
mod module;
mod ring_mul;

#[cfg(test)]
mod tests;

pub use mod3_fold::mod3_fold;

/// Accelerated strategy, bit-identical to [`crate::CpuRef`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuSimd;
