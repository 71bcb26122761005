use crate::{RingError, hal::layouts::Backend};

/// Instantiate a new [crate::hal::layouts::Module].
pub trait ModuleNew<B: Backend>: Sized {
    /// # Panics
    /// Panics if the degree is unsupported or the backend cannot run here.
    fn new(n: usize) -> Self;

    fn try_new(n: usize) -> Result<Self, RingError>;
}
