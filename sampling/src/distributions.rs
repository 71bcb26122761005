use rand::seq::index;

use crate::source::Source;

/// Fills `res` with coefficients uniform in `[0, q)`.
///
/// # Panics
/// Panics if `q` is not a power of two in `[2, 2^16]`.
pub fn fill_uniform(source: &mut Source, q: u32, res: &mut [u16]) {
    assert!(
        q.is_power_of_two() && (2..=1 << 16).contains(&q),
        "q must be a power of two in [2, 2^16], got {q}"
    );
    let mask: u64 = (q - 1) as u64;
    res.iter_mut()
        .for_each(|x| *x = source.next_u64n(q as u64, mask) as u16);
}

/// Appends `2*d` distinct positions in `[0, n)` to `res`: first the `d`
/// positions of the +1 coefficients, then the `d` positions of the -1 ones.
///
/// # Panics
/// Panics if `2*d > n` or `n > 2^16`.
pub fn sample_ternary_indices(source: &mut Source, n: usize, d: usize, res: &mut Vec<u16>) {
    assert!(2 * d <= n, "cannot place {} nonzero coefficients in degree {n}", 2 * d);
    assert!(n <= 1 << 16, "degree {n} does not fit 16-bit indices");
    res.extend(index::sample(source, n, 2 * d).into_iter().map(|i| i as u16));
}

/// Draws the packed index block of a product-form polynomial `p1*p2 + p3`
/// where `p_i` has `d_i` coefficients +1 and `d_i` coefficients -1.
///
/// Returns the indices `[p1+ | p1- | p2+ | p2- | p3+ | p3-]`.
pub fn sample_product_form_indices(source: &mut Source, n: usize, d1: usize, d2: usize, d3: usize) -> Vec<u16> {
    let mut res: Vec<u16> = Vec::with_capacity(2 * (d1 + d2 + d3));
    sample_ternary_indices(source, n, d1, &mut res);
    sample_ternary_indices(source, n, d2, &mut res);
    sample_ternary_indices(source, n, d3, &mut res);
    res
}
