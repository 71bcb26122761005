//! # sparse-ring-backend
//!
//! Dense-by-sparse polynomial multiplication in the NTRU ring
//! `Z_q[X]/(X^N - 1)`, written once against a small trait-based HAL and
//! executed by interchangeable CPU backends.
//!
//! ## Core concepts
//!
//! **Wraparound layout:** a dense operand of degree `N` is stored in `N + 7`
//! words, the last seven mirroring the first seven. The convolution kernel
//! reads eight consecutive coefficients from any offset in `[0, N)` without
//! testing for wraparound. See [`hal::layouts::DensePoly`].
//!
//! **Sparse ternary:** a polynomial with coefficients in `{-1, 0, 1}` stored
//! as the positions of its `+1` coefficients followed by the positions of its
//! `-1` coefficients.
//!
//! **Product form:** `b = p1*p2 + p3` with each `p_i` sparse ternary, packed
//! in one index block. Multiplying by `b` costs three sparse passes.
//!
//! **Deferred reduction:** coefficients accumulate as wrapping `u16` sums and
//! are reduced modulo `q` (a power of two) by a single mask at the end.
//!
//! ## Architecture
//!
//! 1. [`hal::api`]: safe traits on [`hal::layouts::Module`], validating
//!    their inputs and returning [`RingError`].
//! 2. [`hal::oep`]: unsafe extension points implemented by backends.
//! 3. [`hal::delegates`]: blanket glue from api to oep.
//! 4. [`reference`]: portable kernels and a schoolbook oracle.
//!
//! Two backends ship with the crate: [`CpuRef`] (portable) and, on x86_64
//! with the `simd` feature, [`CpuSimd`] (one SSE2 register per group of
//! eight coefficients). Both must produce bit-identical results; the
//! [`test_suite`] checks this.

pub mod error;
pub mod hal;
pub mod implementation;
pub mod reference;
pub mod test_suite;

pub use error::RingError;
pub use implementation::cpu_ref::CpuRef;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub use implementation::cpu_simd::CpuSimd;

#[doc(hidden)]
pub use once_cell;

/// Number of mirrored coefficients appended to a dense operand.
pub const TAIL_LEN: usize = 7;

/// Number of coefficients accumulated per pass of the convolution kernel.
pub const GROUP_LEN: usize = TAIL_LEN + 1;

/// Smallest supported ring degree: an offset advanced by one group must
/// wrap back below `N` after a single subtraction.
pub const MIN_DEGREE: usize = GROUP_LEN;

/// Largest supported ring degree: `N + TAIL_LEN` offsets must fit in `u16`.
pub const MAX_DEGREE: usize = 65520;

/// Length of the backing buffer of a dense polynomial of degree `n`.
#[inline(always)]
pub const fn padded_len(n: usize) -> usize {
    n + TAIL_LEN
}

/// Number of result words written by one kernel call for degree `n`:
/// the largest multiple of [`GROUP_LEN`] not exceeding `n + TAIL_LEN`.
#[inline(always)]
pub const fn groups_len(n: usize) -> usize {
    GROUP_LEN * (padded_len(n) / GROUP_LEN)
}

/// Mask `q - 1` reducing accumulated coefficients modulo `q`.
///
/// `q` must be a power of two in `[2, 2^16]`.
pub fn modulus_mask(q: u32) -> Result<u16, RingError> {
    if !q.is_power_of_two() || !(2..=1 << 16).contains(&q) {
        return Err(RingError::InvalidModulus(q));
    }
    Ok((q - 1) as u16)
}
