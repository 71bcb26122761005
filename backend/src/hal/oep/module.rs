use crate::{
    RingError,
    hal::layouts::{Backend, Module},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::hal::api::ModuleNew] for the public API.
/// # Safety
/// A returned module asserts that every other `*Impl` trait of `B` can run
/// on this machine.
pub unsafe trait ModuleNewImpl<B: Backend> {
    fn new_impl(n: usize) -> Result<Module<B>, RingError>;
}
