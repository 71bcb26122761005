//! Schoolbook convolution in `Z[X]/(X^N - 1)`, used as a correctness oracle.

/// `res[i] = sum_k a[k] * b[(i - k) mod N]` over the integers.
///
/// # Panics
/// Panics if `a` and `b` have different lengths.
pub fn cyclic_mul_i64(a: &[i64], b: &[i64]) -> Vec<i64> {
    assert_eq!(a.len(), b.len(), "operands must share the ring degree");
    let n: usize = a.len();
    let mut res: Vec<i64> = vec![0; n];
    for (k, &ak) in a.iter().enumerate() {
        if ak == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            res[(k + j) % n] += ak * bj;
        }
    }
    res
}

/// Wrapping 16-bit product of dense coefficients `a` by signed coefficients
/// `b`, as the sparse kernels compute it before the final mask.
pub fn ring_mul_naive(res: &mut [u16], a: &[u16], b: &[i64]) {
    let a: Vec<i64> = a.iter().map(|&x| x as i64).collect();
    res.iter_mut()
        .zip(cyclic_mul_i64(&a, b))
        .for_each(|(r, x)| *r = x as u16);
}
