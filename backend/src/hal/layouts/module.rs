use std::marker::PhantomData;

use crate::{MAX_DEGREE, MIN_DEGREE, RingError, groups_len, padded_len};

/// Marker trait for a ring-arithmetic strategy.
pub trait Backend: Sized + Sync + Send {
    /// Short stable name, used in logs and error messages.
    const NAME: &'static str;
}

/// Ring degree `N` bound to a backend `B`.
///
/// Every operation of [`crate::hal::api`] is a method on `Module<B>`; the
/// backend type parameter selects which kernels run.
pub struct Module<B: Backend> {
    n: usize,
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    /// Creates a module without consulting the backend.
    ///
    /// # Panics
    /// Panics if `n` is outside `[MIN_DEGREE, MAX_DEGREE]`.
    #[inline]
    pub fn new_marker(n: usize) -> Self {
        if let Err(e) = Self::check_degree(n) {
            panic!("{e}")
        }
        Self {
            n,
            _marker: PhantomData,
        }
    }

    pub fn check_degree(n: usize) -> Result<(), RingError> {
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&n) {
            return Err(RingError::UnsupportedDegree {
                n,
                min: MIN_DEGREE,
                max: MAX_DEGREE,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Backing length of a dense polynomial: `N + 7`.
    #[inline]
    pub fn padded_len(&self) -> usize {
        padded_len(self.n)
    }

    /// Number of result words one kernel pass writes.
    #[inline]
    pub fn groups_len(&self) -> usize {
        groups_len(self.n)
    }

    pub fn backend_name(&self) -> &'static str {
        B::NAME
    }
}

impl<B: Backend> std::fmt::Debug for Module<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Module").field("backend", &B::NAME).field("n", &self.n).finish()
    }
}
