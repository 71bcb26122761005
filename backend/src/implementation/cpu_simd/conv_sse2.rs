//! SSE2 convolve-and-accumulate kernels.
//!
//! Same algorithm and index contract as
//! [`crate::reference::conv::ring_conv_add_ref`]; the eight accumulators of a
//! group live in one `__m128i`.

use core::arch::x86_64::{__m128i, _mm_add_epi16, _mm_loadu_si128, _mm_storeu_si128, _mm_sub_epi16};

use crate::{
    GROUP_LEN, TAIL_LEN,
    reference::conv::{conv_next_offset, conv_offsets},
};

#[inline(always)]
unsafe fn ring_conv_acc_sse2<F>(res: &mut [u16], a: &[u16], idx: &mut [u16], op: F)
where
    F: Fn(__m128i, __m128i) -> __m128i,
{
    assert!(a.len() >= GROUP_LEN + TAIL_LEN, "operand of {} words is below the minimum degree", a.len());
    let n: usize = a.len() - TAIL_LEN;
    let loop_cnt: usize = GROUP_LEN * (a.len() / GROUP_LEN);

    // The unchecked loads below are in bounds only under these conditions.
    assert!(res.len() >= loop_cnt, "result holds {} < {loop_cnt} words", res.len());
    assert!(idx.iter().all(|&j| (j as usize) < n), "sparse position outside [0, {n})");

    conv_offsets(n, idx);

    let a_ptr: *const u16 = a.as_ptr();
    for group in res[..loop_cnt].chunks_exact_mut(GROUP_LEN) {
        unsafe {
            let mut acc: __m128i = _mm_loadu_si128(group.as_ptr() as *const __m128i);
            for j in idx.iter_mut() {
                // offset < N, so offset + 8 <= N + 7 = a.len()
                let x: __m128i = _mm_loadu_si128(a_ptr.add(*j as usize) as *const __m128i);
                acc = op(acc, x);
                *j = conv_next_offset(n, *j);
            }
            _mm_storeu_si128(group.as_mut_ptr() as *mut __m128i, acc);
        }
    }
}

/// # Safety
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn ring_conv_add_sse2(res: &mut [u16], a: &[u16], idx: &mut [u16]) {
    unsafe { ring_conv_acc_sse2(res, a, idx, |acc, x| _mm_add_epi16(acc, x)) }
}

/// # Safety
/// See [`ring_conv_add_sse2`].
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn ring_conv_sub_sse2(res: &mut [u16], a: &[u16], idx: &mut [u16]) {
    unsafe { ring_conv_acc_sse2(res, a, idx, |acc, x| _mm_sub_epi16(acc, x)) }
}
