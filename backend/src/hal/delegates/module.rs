use crate::{
    RingError,
    hal::{
        api::ModuleNew,
        layouts::{Backend, Module},
        oep::ModuleNewImpl,
    },
};

impl<B> ModuleNew<B> for Module<B>
where
    B: Backend + ModuleNewImpl<B>,
{
    fn new(n: usize) -> Self {
        match B::new_impl(n) {
            Ok(module) => module,
            Err(e) => panic!("{e}"),
        }
    }

    fn try_new(n: usize) -> Result<Self, RingError> {
        Module::<B>::check_degree(n)?;
        B::new_impl(n)
    }
}
