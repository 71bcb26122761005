use crate::{
    hal::{
        layouts::Module,
        oep::{RingConvAddImpl, RingConvSubImpl, RingMod3Impl, RingMulSparseImpl, RingMulTernaryImpl},
    },
    implementation::cpu_simd::{
        CpuSimd,
        conv_sse2::{ring_conv_add_sse2, ring_conv_sub_sse2},
        mod3_fold::mod3_fold,
    },
    reference::{
        ConvAdd, ConvSub, Mod3,
        sparse::{ring_mul_sparse, ring_mul_ternary},
    },
};

// SSE2 is part of the x86_64 baseline, so these kernels are sound on any
// CPU that can run this binary; `Module<CpuSimd>` additionally checks at
// construction time.
impl ConvAdd for CpuSimd {
    #[inline(always)]
    fn conv_add(res: &mut [u16], a: &[u16], idx: &mut [u16]) {
        unsafe { ring_conv_add_sse2(res, a, idx) }
    }
}

impl ConvSub for CpuSimd {
    #[inline(always)]
    fn conv_sub(res: &mut [u16], a: &[u16], idx: &mut [u16]) {
        unsafe { ring_conv_sub_sse2(res, a, idx) }
    }
}

impl Mod3 for CpuSimd {
    #[inline(always)]
    fn mod3(x: u16) -> u16 {
        mod3_fold(x)
    }
}

unsafe impl RingConvAddImpl<Self> for CpuSimd {
    fn ring_conv_add_impl(_module: &Module<Self>, res: &mut [u16], a: &[u16], idx: &mut [u16]) {
        Self::conv_add(res, a, idx);
    }
}

unsafe impl RingConvSubImpl<Self> for CpuSimd {
    fn ring_conv_sub_impl(_module: &Module<Self>, res: &mut [u16], a: &[u16], idx: &mut [u16]) {
        Self::conv_sub(res, a, idx);
    }
}

unsafe impl RingMulTernaryImpl<Self> for CpuSimd {
    fn ring_mul_ternary_impl(_module: &Module<Self>, res: &mut [u16], a: &[u16], b: &[u16], tmp: &mut [u16]) {
        ring_mul_ternary::<Self>(res, a, b, tmp);
    }
}

unsafe impl RingMulSparseImpl<Self> for CpuSimd {
    fn ring_mul_sparse_impl(
        _module: &Module<Self>,
        res: &mut [u16],
        a: &[u16],
        b: &[u16],
        lens: [usize; 3],
        q_mask: u16,
        rtmp: &mut [u16],
        btmp: &mut [u16],
    ) {
        ring_mul_sparse::<Self>(res, a, b, lens, q_mask, rtmp, btmp);
    }
}

unsafe impl RingMod3Impl<Self> for CpuSimd {
    fn ring_mod3_impl(x: u16) -> u16 {
        Self::mod3(x)
    }
}
