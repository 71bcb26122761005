use crate::{GROUP_LEN, TAIL_LEN};

/// Rewrites each position `p` as the offset `N - p` (`0` stays `0`) at which
/// the scan over `a` must start so that the first group of result
/// coefficients receives `a * X^p`.
#[inline(always)]
pub fn conv_offsets(n: usize, idx: &mut [u16]) {
    idx.iter_mut().for_each(|j| {
        if *j != 0 {
            *j = n as u16 - *j;
        }
    });
}

/// Advances a running offset by one group, wrapping once at `n`.
#[inline(always)]
pub fn conv_next_offset(n: usize, offset: u16) -> u16 {
    let next: usize = offset as usize + GROUP_LEN;
    if next >= n { (next - n) as u16 } else { next as u16 }
}

#[inline(always)]
fn ring_conv_acc_ref<F>(res: &mut [u16], a: &[u16], idx: &mut [u16], op: F)
where
    F: Fn(u16, u16) -> u16,
{
    let n: usize = a.len() - TAIL_LEN;
    let loop_cnt: usize = GROUP_LEN * (a.len() / GROUP_LEN);

    #[cfg(debug_assertions)]
    {
        assert!(loop_cnt >= n, "kernel would cover {loop_cnt} < N = {n} coefficients");
        assert!(res.len() >= loop_cnt, "result holds {} < {loop_cnt} words", res.len());
        assert!(idx.iter().all(|&j| (j as usize) < n), "sparse position outside [0, {n})");
    }

    conv_offsets(n, idx);

    for group in res[..loop_cnt].chunks_exact_mut(GROUP_LEN) {
        let mut sum: [u16; GROUP_LEN] = [0u16; GROUP_LEN];
        sum.copy_from_slice(group);
        for j in idx.iter_mut() {
            let offset: usize = *j as usize;
            sum.iter_mut()
                .zip(&a[offset..offset + GROUP_LEN])
                .for_each(|(s, &x)| *s = op(*s, x));
            *j = conv_next_offset(n, *j);
        }
        group.copy_from_slice(&sum);
    }
}

/// Portable convolve-and-add: `res += a * sum_j X^{idx[j]}` with wrapping
/// 16-bit accumulation.
pub fn ring_conv_add_ref(res: &mut [u16], a: &[u16], idx: &mut [u16]) {
    ring_conv_acc_ref(res, a, idx, u16::wrapping_add);
}

/// Portable convolve-and-subtract: `res -= a * sum_j X^{idx[j]}`.
pub fn ring_conv_sub_ref(res: &mut [u16], a: &[u16], idx: &mut [u16]) {
    ring_conv_acc_ref(res, a, idx, u16::wrapping_sub);
}

#[cfg(test)]
mod tests {
    use super::*;

    const A11: [u16; 18] = [8, 25, 22, 20, 12, 24, 15, 19, 12, 19, 16, 8, 25, 22, 20, 12, 24, 15];

    #[test]
    fn offsets_transform() {
        let mut idx: Vec<u16> = vec![0, 1, 5, 10];
        conv_offsets(11, &mut idx);
        assert_eq!(idx, vec![0, 10, 6, 1]);
        assert_eq!(conv_next_offset(11, 2), 10);
        assert_eq!(conv_next_offset(11, 3), 0);
        assert_eq!(conv_next_offset(11, 10), 7);
    }

    #[test]
    fn monomial_shifts_cyclically() {
        for p in 0..11u16 {
            let mut res: Vec<u16> = vec![0; 18];
            ring_conv_add_ref(&mut res, &A11, &mut [p]);
            for i in 0..11 {
                assert_eq!(res[i], A11[(i + 11 - p as usize) % 11], "p={p} i={i}");
            }
        }
    }

    #[test]
    fn sub_wraps_below_zero() {
        let mut res: Vec<u16> = vec![0; 18];
        ring_conv_sub_ref(&mut res, &A11, &mut [0]);
        assert_eq!(res[0], 0u16.wrapping_sub(8));
        assert_eq!(res[1], 0u16.wrapping_sub(25));
    }
}
