use crate::{
    RingError,
    hal::{
        layouts::{Backend, Module},
        oep::ModuleNewImpl,
    },
    implementation::cpu_simd::CpuSimd,
};

impl Backend for CpuSimd {
    const NAME: &'static str = "cpu_simd";
}

impl CpuSimd {
    /// Returns true if the running CPU can execute this backend.
    pub fn is_supported() -> bool {
        std::arch::is_x86_feature_detected!("sse2")
    }
}

unsafe impl ModuleNewImpl<Self> for CpuSimd {
    fn new_impl(n: usize) -> Result<Module<Self>, RingError> {
        if !Self::is_supported() {
            return Err(RingError::BackendUnavailable {
                backend: Self::NAME,
                reason: "CPU lacks SSE2",
            });
        }
        Module::<Self>::check_degree(n)?;
        Ok(Module::new_marker(n))
    }
}
