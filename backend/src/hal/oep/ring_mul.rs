use crate::hal::layouts::{Backend, Module};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::conv::ring_conv_add_ref] for reference code.
/// * See [crate::hal::api::RingConvAdd] for the public API.
/// # Safety
/// `a.len() == N + 7` with its tail in sync, `res.len() >= groups_len(N)`,
/// every `idx[j] < N`.
pub unsafe trait RingConvAddImpl<B: Backend> {
    fn ring_conv_add_impl(module: &Module<B>, res: &mut [u16], a: &[u16], idx: &mut [u16]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::conv::ring_conv_sub_ref] for reference code.
/// * See [crate::hal::api::RingConvSub] for the public API.
/// # Safety
/// Same preconditions as [RingConvAddImpl].
pub unsafe trait RingConvSubImpl<B: Backend> {
    fn ring_conv_sub_impl(module: &Module<B>, res: &mut [u16], a: &[u16], idx: &mut [u16]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::sparse::ring_mul_ternary] for reference code.
/// * See [crate::hal::api::RingMulTernary] for the public API.
/// # Safety
/// Preconditions of [RingConvAddImpl] for `res` and `a`; `b.len()` even with
/// every position `< N`; `tmp.len() >= b.len() / 2`.
pub unsafe trait RingMulTernaryImpl<B: Backend> {
    fn ring_mul_ternary_impl(module: &Module<B>, res: &mut [u16], a: &[u16], b: &[u16], tmp: &mut [u16]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::sparse::ring_mul_sparse] for reference code.
/// * See [crate::hal::api::RingMulSparse] for the public API.
/// # Safety
/// `res`, `a`, `rtmp` hold `N + 7` words, `a` with its tail in sync; each
/// `lens[i]` is even, `lens` sums to at most `b.len()` and every position is
/// `< N`; `btmp.len() >= max(lens) / 2`.
pub unsafe trait RingMulSparseImpl<B: Backend> {
    #[allow(clippy::too_many_arguments)]
    fn ring_mul_sparse_impl(
        module: &Module<B>,
        res: &mut [u16],
        a: &[u16],
        b: &[u16],
        lens: [usize; 3],
        q_mask: u16,
        rtmp: &mut [u16],
        btmp: &mut [u16],
    );
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mod3::mod3_ref] for reference code.
/// * See [crate::hal::api::RingMod3] for the public API.
/// # Safety
/// Must return `x % 3` for every `x`.
pub unsafe trait RingMod3Impl<B: Backend> {
    fn ring_mod3_impl(x: u16) -> u16;
}
