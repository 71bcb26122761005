use sparse_ring_sampling::{Source, fill_uniform, sample_product_form_indices, sample_ternary_indices};

use crate::{
    RingError,
    hal::{
        api::{RingConvAdd, RingConvSub, RingMulSparse, RingMulTernary},
        layouts::{Backend, DensePoly, DensePolyOwned, Module, ProductForm, ProductFormOwned, ScratchOwned, SparseTernary},
    },
    reference::naive::ring_mul_naive,
    test_suite::{
        conv::random_dense,
        vectors::{A11, A401, B11, B401, B401_LENS, C11, Q11, Q401, R11, R401},
    },
};

fn random_key(source: &mut Source, n: usize, q: u32) -> DensePolyOwned {
    let mut a: DensePolyOwned = DensePoly::alloc(n);
    fill_uniform(source, q, a.coeffs_mut());
    a.sync_tail();
    a
}

/// `(A11 * B11 + C11) mod 32` against the fixed toy vector.
pub fn test_ring_mul_ternary_kat11<B: Backend>(module: &Module<B>)
where
    Module<B>: RingMulTernary,
{
    assert_eq!(module.n(), 11);
    let a: DensePoly<&[u16]> = DensePoly::from_data(&A11[..], 11).unwrap();
    let b: SparseTernary<&[u16]> = SparseTernary::new(&B11[..], 11);
    let mut res: DensePolyOwned = DensePoly::alloc(11);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(module.ring_mul_ternary_tmp_len(b.weight()));

    module.ring_mul_ternary(&mut res, &a, &b, scratch.borrow()).unwrap();
    res.coeffs_mut()
        .iter_mut()
        .zip(C11)
        .for_each(|(r, c)| *r = r.wrapping_add(c as u16) & (Q11 - 1) as u16);

    assert_eq!(res.coeffs(), &R11);
}

/// The N = 11 demonstration driven through the raw add / sub entry points.
pub fn test_ring_conv_kat11<B: Backend>(module: &Module<B>)
where
    Module<B>: RingConvAdd + RingConvSub,
{
    assert_eq!(module.n(), 11);
    let a: DensePoly<&[u16]> = DensePoly::from_data(&A11[..], 11).unwrap();
    let mut b: [u16; 6] = B11;
    let (plus, minus) = b.split_at_mut(3);
    let mut res: DensePolyOwned = DensePoly::alloc(11);

    module.ring_conv_add(&mut res, &a, plus).unwrap();
    module.ring_conv_sub(&mut res, &a, minus).unwrap();
    for i in 0..11 {
        assert_eq!(res.coeffs()[i].wrapping_add(C11[i] as u16) & 0x1F, R11[i], "i = {i}");
    }
}

pub fn test_ring_mul_sparse_kat401<B: Backend>(module: &Module<B>)
where
    Module<B>: RingMulSparse,
{
    assert_eq!(module.n(), 401);
    let a: DensePolyOwned = DensePoly::from_coeffs(&A401);
    let [l1, l2, l3] = B401_LENS;
    let b: ProductForm<&[u16]> = ProductForm::new(&B401[..], 401, l1, l2, l3);
    let mut res: DensePolyOwned = DensePoly::alloc(401);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(module.ring_mul_sparse_tmp_len(&b));

    module.ring_mul_sparse(&mut res, &a, &b, Q401, scratch.borrow()).unwrap();
    assert_eq!(res.coeffs(), &R401[..]);
}

/// Product form against the schoolbook product with the dense expansion of
/// `p1*p2 + p3`, over random keys and weights.
pub fn test_ring_mul_sparse_matches_expansion<B: Backend>(module: &Module<B>)
where
    Module<B>: RingMulSparse,
{
    let mut source: Source = Source::new([5u8; 32]);
    let n: usize = module.n();
    let q: u32 = 2048;

    for (d1, d2, d3) in [(1, 1, 1), (2, 3, 1), (n / 6, n / 6, n / 8), (0, 2, 2), (2, 2, 0)] {
        let a: DensePolyOwned = random_key(&mut source, n, q);
        let idx: Vec<u16> = sample_product_form_indices(&mut source, n, d1, d2, d3);
        let b: ProductFormOwned = ProductForm::new(idx, n, 2 * d1, 2 * d2, 2 * d3);
        let mut res: DensePolyOwned = DensePoly::alloc(n);
        let mut scratch: ScratchOwned = ScratchOwned::alloc(module.ring_mul_sparse_tmp_len(&b));

        module.ring_mul_sparse(&mut res, &a, &b, q, scratch.borrow()).unwrap();

        let mut want: Vec<u16> = vec![0; n];
        ring_mul_naive(&mut want, a.coeffs(), &b.expand());
        want.iter_mut().for_each(|x| *x &= (q - 1) as u16);
        assert_eq!(res.coeffs(), &want[..], "weights ({d1}, {d2}, {d3})");
        assert!(res.is_tail_synced());
    }
}

/// The output of one product can be fed straight into the next.
pub fn test_ring_mul_sparse_chained<B: Backend>(module: &Module<B>)
where
    Module<B>: RingMulSparse,
{
    let mut source: Source = Source::new([6u8; 32]);
    let n: usize = module.n();
    let q: u32 = 2048;
    let a: DensePolyOwned = random_key(&mut source, n, q);
    let b: ProductFormOwned = ProductForm::new(sample_product_form_indices(&mut source, n, 2, 2, 1), n, 4, 4, 2);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(module.ring_mul_sparse_tmp_len(&b));

    let mut once: DensePolyOwned = DensePoly::alloc(n);
    module.ring_mul_sparse(&mut once, &a, &b, q, scratch.borrow()).unwrap();
    let mut twice: DensePolyOwned = DensePoly::alloc(n);
    module.ring_mul_sparse(&mut twice, &once, &b, q, scratch.borrow()).unwrap();

    let expanded: Vec<i64> = b.expand();
    let mut want: Vec<u16> = vec![0; n];
    ring_mul_naive(&mut want, a.coeffs(), &expanded);
    let tmp: Vec<u16> = want.clone();
    ring_mul_naive(&mut want, &tmp, &expanded);
    want.iter_mut().for_each(|x| *x &= (q - 1) as u16);
    assert_eq!(twice.coeffs(), &want[..]);
}

pub fn test_ring_mul_sparse_rejects_bad_input<B: Backend>(module: &Module<B>)
where
    Module<B>: RingMulSparse + RingMulTernary,
{
    let mut source: Source = Source::new([7u8; 32]);
    let n: usize = module.n();
    let a: DensePolyOwned = random_key(&mut source, n, 2048);
    let mut res: DensePolyOwned = DensePoly::alloc(n);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(2 * n + 16);

    let odd: ProductFormOwned = ProductForm::new(vec![0; 6], n, 2, 1, 2);
    assert_eq!(
        module.ring_mul_sparse(&mut res, &a, &odd, 2048, scratch.borrow()),
        Err(RingError::OddComponentLength { component: 2, len: 1 })
    );

    let long: ProductFormOwned = ProductForm::new(vec![0; 6], n, 2, 2, 4);
    assert_eq!(
        module.ring_mul_sparse(&mut res, &a, &long, 2048, scratch.borrow()),
        Err(RingError::IndexCapacityExceeded {
            required: 8,
            capacity: 6
        })
    );

    let huge: ProductFormOwned = ProductForm::new(vec![0; 6], n, usize::MAX - 1, 2, 2);
    assert_eq!(
        module.ring_mul_sparse(&mut res, &a, &huge, 2048, scratch.borrow()),
        Err(RingError::IndexCapacityExceeded {
            required: usize::MAX,
            capacity: 6
        })
    );

    let ok: ProductFormOwned = ProductForm::new(vec![0, 1, 2, 3, 4, 5], n, 2, 2, 2);
    assert_eq!(
        module.ring_mul_sparse(&mut res, &a, &ok, 3000, scratch.borrow()),
        Err(RingError::InvalidModulus(3000))
    );

    let mut small: ScratchOwned = ScratchOwned::alloc(n);
    assert!(matches!(
        module.ring_mul_sparse(&mut res, &a, &ok, 2048, small.borrow()),
        Err(RingError::ScratchTooSmall { .. })
    ));

    let wrong_degree: ProductFormOwned = ProductForm::new(vec![0, 1, 2, 3, 4, 5], n + 1, 2, 2, 2);
    assert!(matches!(
        module.ring_mul_sparse(&mut res, &a, &wrong_degree, 2048, scratch.borrow()),
        Err(RingError::DegreeMismatch { .. })
    ));

    let unbalanced: SparseTernary<Vec<u16>> = SparseTernary::new(vec![1, 2, 3], n);
    assert!(matches!(
        module.ring_mul_ternary(&mut res, &a, &unbalanced, scratch.borrow()),
        Err(RingError::UnbalancedTernary { .. })
    ));
}

pub fn test_cross_ring_conv<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: RingConvAdd + RingConvSub,
    Module<BT>: RingConvAdd + RingConvSub,
{
    assert_eq!(module_ref.n(), module_test.n());
    let mut source: Source = Source::new([8u8; 32]);
    let n: usize = module_ref.n();

    for weight in 1..=(n / 2).min(24) {
        let a: DensePolyOwned = random_dense(&mut source, n);
        let r0: DensePolyOwned = random_dense(&mut source, n);
        let mut idx: Vec<u16> = Vec::new();
        sample_ternary_indices(&mut source, n, weight, &mut idx);

        let mut have: DensePolyOwned = r0.clone();
        let mut want: DensePolyOwned = r0;
        module_ref.ring_conv_add(&mut want, &a, &mut idx.clone()).unwrap();
        module_test.ring_conv_add(&mut have, &a, &mut idx.clone()).unwrap();
        module_ref.ring_conv_sub(&mut want, &a, &mut idx[weight..].to_vec()).unwrap();
        module_test.ring_conv_sub(&mut have, &a, &mut idx[weight..].to_vec()).unwrap();

        // Every word the kernel writes must agree, not only the first N.
        assert_eq!(have.raw()[..module_ref.groups_len()], want.raw()[..module_ref.groups_len()], "weight {weight}");
    }
}

pub fn test_cross_ring_mul_sparse<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: RingMulSparse,
    Module<BT>: RingMulSparse,
{
    assert_eq!(module_ref.n(), module_test.n());
    let mut source: Source = Source::new([9u8; 32]);
    let n: usize = module_ref.n();

    for q in [32u32, 2048, 1 << 16] {
        for _ in 0..4 {
            let a: DensePolyOwned = random_key(&mut source, n, q);
            let (d1, d2, d3) = (n / 50 + 1, n / 50 + 1, n / 64 + 1);
            let b: ProductFormOwned =
                ProductForm::new(sample_product_form_indices(&mut source, n, d1, d2, d3), n, 2 * d1, 2 * d2, 2 * d3);
            let mut scratch: ScratchOwned = ScratchOwned::alloc(module_ref.ring_mul_sparse_tmp_len(&b));

            let mut want: DensePolyOwned = DensePoly::alloc(n);
            let mut have: DensePolyOwned = DensePoly::alloc(n);
            module_ref.ring_mul_sparse(&mut want, &a, &b, q, scratch.borrow()).unwrap();
            module_test.ring_mul_sparse(&mut have, &a, &b, q, scratch.borrow()).unwrap();
            assert_eq!(have, want, "q = {q}");
        }
    }
}
