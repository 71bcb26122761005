use crate::{
    RingError,
    hal::{
        layouts::{Backend, Module},
        oep::ModuleNewImpl,
    },
    implementation::cpu_ref::CpuRef,
};

impl Backend for CpuRef {
    const NAME: &'static str = "cpu_ref";
}

unsafe impl ModuleNewImpl<Self> for CpuRef {
    fn new_impl(n: usize) -> Result<Module<Self>, RingError> {
        Module::<Self>::check_degree(n)?;
        Ok(Module::new_marker(n))
    }
}
