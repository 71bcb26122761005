//! Portable kernels shared by every backend, and a schoolbook oracle.

pub mod conv;
pub mod mod3;
pub mod naive;
pub mod sparse;

/// Accumulates `a * X^{idx[j]}` for every `j` into `res`.
///
/// `a` is a dense operand in the `N + 7` wraparound layout, `res` holds at
/// least [`crate::groups_len`] words. `idx` is consumed: on return it holds
/// running offsets, not the original positions.
pub trait ConvAdd {
    fn conv_add(res: &mut [u16], a: &[u16], idx: &mut [u16]);
}

/// Same contract as [`ConvAdd`] but subtracts the contributions.
pub trait ConvSub {
    fn conv_sub(res: &mut [u16], a: &[u16], idx: &mut [u16]);
}

/// `x mod 3` for a 16-bit word.
pub trait Mod3 {
    fn mod3(x: u16) -> u16;
}
