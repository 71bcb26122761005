use crate::{
    hal::{
        layouts::Module,
        oep::{RingConvAddImpl, RingConvSubImpl, RingMod3Impl, RingMulSparseImpl, RingMulTernaryImpl},
    },
    implementation::cpu_ref::CpuRef,
    reference::{
        ConvAdd, ConvSub, Mod3,
        conv::{ring_conv_add_ref, ring_conv_sub_ref},
        mod3::mod3_ref,
        sparse::{ring_mul_sparse, ring_mul_ternary},
    },
};

impl ConvAdd for CpuRef {
    #[inline(always)]
    fn conv_add(res: &mut [u16], a: &[u16], idx: &mut [u16]) {
        ring_conv_add_ref(res, a, idx);
    }
}

impl ConvSub for CpuRef {
    #[inline(always)]
    fn conv_sub(res: &mut [u16], a: &[u16], idx: &mut [u16]) {
        ring_conv_sub_ref(res, a, idx);
    }
}

impl Mod3 for CpuRef {
    #[inline(always)]
    fn mod3(x: u16) -> u16 {
        mod3_ref(x)
    }
}

unsafe impl RingConvAddImpl<Self> for CpuRef {
    fn ring_conv_add_impl(_module: &Module<Self>, res: &mut [u16], a: &[u16], idx: &mut [u16]) {
        Self::conv_add(res, a, idx);
    }
}

unsafe impl RingConvSubImpl<Self> for CpuRef {
    fn ring_conv_sub_impl(_module: &Module<Self>, res: &mut [u16], a: &[u16], idx: &mut [u16]) {
        Self::conv_sub(res, a, idx);
    }
}

unsafe impl RingMulTernaryImpl<Self> for CpuRef {
    fn ring_mul_ternary_impl(_module: &Module<Self>, res: &mut [u16], a: &[u16], b: &[u16], tmp: &mut [u16]) {
        ring_mul_ternary::<Self>(res, a, b, tmp);
    }
}

unsafe impl RingMulSparseImpl<Self> for CpuRef {
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

unsafe impl RingMod3Impl<Self> for CpuRef {
    fn ring_mod3_impl(x: u16) -> u16 {
        Self::mod3(x)
    }
}
