use crate::{
    RingError,
    hal::layouts::{DensePolyToMut, DensePolyToRef, ProductForm, Scratch, SparseTernary},
};

/// Accumulates `a * sum_j X^{idx[j]}` into `res`.
///
/// `res` is not cleared. `idx` is consumed: on return it holds internal
/// running offsets rather than positions. Only `res[..N]` is meaningful
/// afterwards; call [`crate::hal::layouts::DensePoly::sync_tail`] before
/// reusing `res` as an operand.
pub trait RingConvAdd {
    fn ring_conv_add<R, A>(&self, res: &mut R, a: &A, idx: &mut [u16]) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef;
}

/// Subtracts `a * sum_j X^{idx[j]}` from `res`. See [RingConvAdd].
pub trait RingConvSub {
    fn ring_conv_sub<R, A>(&self, res: &mut R, a: &A, idx: &mut [u16]) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef;
}

/// Accumulates `a * b` into `res` for a sparse ternary `b`, unreduced.
pub trait RingMulTernary {
    /// Scratch words [RingMulTernary::ring_mul_ternary] needs for weight `w`.
    fn ring_mul_ternary_tmp_len(&self, weight: usize) -> usize;

    fn ring_mul_ternary<R, A, D>(&self, res: &mut R, a: &A, b: &SparseTernary<D>, scratch: &mut Scratch) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
        D: AsRef<[u16]>;
}

/// Overwrites `res` with `a * (p1*p2 + p3)` reduced modulo `q`.
///
/// `q` is a power of two. On return the `N` coefficients of `res` lie in
/// `[0, q)` and its tail is in sync, so `res` can feed another product.
pub trait RingMulSparse {
    /// Scratch words [RingMulSparse::ring_mul_sparse] needs for `b`.
    fn ring_mul_sparse_tmp_len<D>(&self, b: &ProductForm<D>) -> usize
    where
        D: AsRef<[u16]>;

    fn ring_mul_sparse<R, A, D>(
        &self,
        res: &mut R,
        a: &A,
        b: &ProductForm<D>,
        q: u32,
        scratch: &mut Scratch,
    ) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
        D: AsRef<[u16]>;
}

/// `x mod 3`.
pub trait RingMod3 {
    fn mod3(&self, x: u16) -> u16;
}
