//! Sparse multipliers composed from the [`ConvAdd`] / [`ConvSub`] kernels of
//! a backend `K`. Buffers are raw slices; validation happens in the api.

use zeroize::Zeroize;

use crate::{
    TAIL_LEN,
    reference::{ConvAdd, ConvSub},
};

/// `res += a * b` for a sparse ternary `b` given as `[plus | minus]`.
///
/// `tmp` must hold at least `b.len() / 2` words; it receives copies of the
/// positions because the kernels consume their index argument.
pub fn ring_mul_ternary<K>(res: &mut [u16], a: &[u16], b: &[u16], tmp: &mut [u16])
where
    K: ConvAdd + ConvSub,
{
    let w: usize = b.len() >> 1;
    let (plus, minus) = b[..2 * w].split_at(w);
    let tmp: &mut [u16] = &mut tmp[..w];
    tmp.copy_from_slice(plus);
    K::conv_add(res, a, tmp);
    tmp.copy_from_slice(minus);
    K::conv_sub(res, a, tmp);
    tmp.zeroize();
}

/// `res = a * (p1*p2 + p3) mod (X^N - 1, q)` for a product-form index block.
///
/// * `res`, `a`, `rtmp`: `N + 7` words each; `a` must have its tail in sync.
/// * `b`: `[p1+ | p1- | p2+ | p2- | p3+ | p3-]` with `lens` counting both
///   halves of each factor.
/// * `btmp`: at least `max(lens) / 2` words.
/// * `q_mask`: `q - 1` for a power-of-two modulus `q`.
///
/// Only `res[..N]` is reduced on return.
#[allow(clippy::too_many_arguments)]
pub fn ring_mul_sparse<K>(
    res: &mut [u16],
    a: &[u16],
    b: &[u16],
    lens: [usize; 3],
    q_mask: u16,
    rtmp: &mut [u16],
    btmp: &mut [u16],
) where
    K: ConvAdd + ConvSub,
{
    let n: usize = a.len() - TAIL_LEN;

    res.fill(0);
    rtmp.fill(0);

    let (b1, rest) = b.split_at(lens[0]);
    let (b2, rest) = rest.split_at(lens[1]);
    let b3: &[u16] = &rest[..lens[2]];

    // rtmp = a * p1
    ring_mul_ternary::<K>(rtmp, a, b1, btmp);
    rtmp.copy_within(..TAIL_LEN, n);

    // res = rtmp * p2 = a * p1 * p2
    ring_mul_ternary::<K>(res, rtmp, b2, btmp);

    // res += a * p3
    ring_mul_ternary::<K>(res, a, b3, btmp);

    res[..n].iter_mut().for_each(|x| *x &= q_mask);
    rtmp.zeroize();
}
