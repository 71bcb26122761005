use sparse_ring_sampling::{Source, fill_uniform, sample_ternary_indices};

use crate::{
    RingError,
    hal::{
        api::{RingConvAdd, RingConvSub},
        layouts::{Backend, DensePoly, DensePolyOwned, Module},
    },
    reference::naive::ring_mul_naive,
};

/// Uniform dense polynomial over the full 16-bit range, tail in sync.
pub fn random_dense(source: &mut Source, n: usize) -> DensePolyOwned {
    let mut a: DensePolyOwned = DensePoly::alloc(n);
    fill_uniform(source, 1 << 16, a.coeffs_mut());
    a.sync_tail();
    a
}

pub fn test_ring_conv_monomial<B: Backend>(module: &Module<B>)
where
    Module<B>: RingConvAdd,
{
    let mut source: Source = Source::new([0u8; 32]);
    let n: usize = module.n();
    let a: DensePolyOwned = random_dense(&mut source, n);

    for p in 0..n {
        let mut res: DensePolyOwned = DensePoly::alloc(n);
        module.ring_conv_add(&mut res, &a, &mut [p as u16]).unwrap();

        let mut b: Vec<i64> = vec![0; n];
        b[p] = 1;
        let mut want: Vec<u16> = vec![0; n];
        ring_mul_naive(&mut want, a.coeffs(), &b);
        assert_eq!(res.coeffs(), &want[..], "X^{p}");
    }
}

pub fn test_ring_conv_matches_naive<B: Backend>(module: &Module<B>)
where
    Module<B>: RingConvAdd + RingConvSub,
{
    let mut source: Source = Source::new([1u8; 32]);
    let n: usize = module.n();

    for weight in [1, 3, n / 4] {
        let a: DensePolyOwned = random_dense(&mut source, n);
        let mut idx: Vec<u16> = Vec::new();
        sample_ternary_indices(&mut source, n, weight, &mut idx);

        let mut b: Vec<i64> = vec![0; n];
        idx[..weight].iter().for_each(|&i| b[i as usize] += 1);
        idx[weight..].iter().for_each(|&i| b[i as usize] -= 1);

        let mut res: DensePolyOwned = DensePoly::alloc(n);
        let (plus, minus) = idx.split_at_mut(weight);
        module.ring_conv_add(&mut res, &a, plus).unwrap();
        module.ring_conv_sub(&mut res, &a, minus).unwrap();

        let mut want: Vec<u16> = vec![0; n];
        ring_mul_naive(&mut want, a.coeffs(), &b);
        assert_eq!(res.coeffs(), &want[..], "weight {weight}");
    }
}

/// Folding two disjoint index sets in one call or in two calls gives the
/// same accumulator.
pub fn test_ring_conv_linearity<B: Backend>(module: &Module<B>)
where
    Module<B>: RingConvAdd + RingConvSub,
{
    let mut source: Source = Source::new([2u8; 32]);
    let n: usize = module.n();
    let a: DensePolyOwned = random_dense(&mut source, n);
    let r0: DensePolyOwned = random_dense(&mut source, n);

    let mut idx: Vec<u16> = Vec::new();
    sample_ternary_indices(&mut source, n, n / 4, &mut idx);
    let (i1, i2) = idx.split_at(idx.len() / 3);

    let mut joint: DensePolyOwned = r0.clone();
    module.ring_conv_add(&mut joint, &a, &mut idx.clone()).unwrap();

    let mut split: DensePolyOwned = r0.clone();
    module.ring_conv_add(&mut split, &a, &mut i1.to_vec()).unwrap();
    module.ring_conv_add(&mut split, &a, &mut i2.to_vec()).unwrap();
    assert_eq!(joint.coeffs(), split.coeffs());

    let mut joint: DensePolyOwned = r0.clone();
    module.ring_conv_sub(&mut joint, &a, &mut idx.clone()).unwrap();

    let mut split: DensePolyOwned = r0;
    module.ring_conv_sub(&mut split, &a, &mut i2.to_vec()).unwrap();
    module.ring_conv_sub(&mut split, &a, &mut i1.to_vec()).unwrap();
    assert_eq!(joint.coeffs(), split.coeffs());
}

/// Subtracting the contribution just added restores the accumulator.
pub fn test_ring_conv_add_sub_inverse<B: Backend>(module: &Module<B>)
where
    Module<B>: RingConvAdd + RingConvSub,
{
    let mut source: Source = Source::new([3u8; 32]);
    let n: usize = module.n();

    for _ in 0..4 {
        let a: DensePolyOwned = random_dense(&mut source, n);
        let r0: DensePolyOwned = random_dense(&mut source, n);
        let mut idx: Vec<u16> = Vec::new();
        sample_ternary_indices(&mut source, n, n / 3, &mut idx);

        let mut res: DensePolyOwned = r0.clone();
        module.ring_conv_add(&mut res, &a, &mut idx.clone()).unwrap();
        assert_ne!(res.coeffs(), r0.coeffs());
        module.ring_conv_sub(&mut res, &a, &mut idx).unwrap();
        assert_eq!(res.coeffs(), r0.coeffs());
    }
}

pub fn test_ring_conv_rejects_bad_input<B: Backend>(module: &Module<B>)
where
    Module<B>: RingConvAdd,
{
    let n: usize = module.n();
    let mut source: Source = Source::new([4u8; 32]);
    let a: DensePolyOwned = random_dense(&mut source, n);
    let mut res: DensePolyOwned = DensePoly::alloc(n);

    assert_eq!(
        module.ring_conv_add(&mut res, &a, &mut [0, n as u16]),
        Err(RingError::IndexOutOfRange {
            position: 1,
            index: n as u16,
            n
        })
    );

    let other: DensePolyOwned = random_dense(&mut source, n + 1);
    assert_eq!(
        module.ring_conv_add(&mut res, &other, &mut [0]),
        Err(RingError::DegreeMismatch {
            expected: n,
            actual: n + 1
        })
    );

    let mut stale: DensePolyOwned = a.clone();
    let x0: u16 = stale.coeffs()[0].wrapping_add(1);
    stale.coeffs_mut()[0] = x0;
    assert!(matches!(
        module.ring_conv_add(&mut res, &stale, &mut [0]),
        Err(RingError::TailOutOfSync(_))
    ));

    let short: DensePoly<Vec<u16>> = DensePoly {
        data: vec![0; n],
        n,
    };
    assert!(matches!(
        module.ring_conv_add(&mut res, &short, &mut [0]),
        Err(RingError::DenseLength { .. })
    ));
}
