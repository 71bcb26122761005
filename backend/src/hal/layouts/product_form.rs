use crate::{
    RingError,
    hal::layouts::{SparseTernary, check_indices},
    reference::naive::cyclic_mul_i64,
};

/// A sparse polynomial in product form, `b = p1*p2 + p3`.
///
/// The three sparse ternary factors are packed back to back in `data`:
/// `[p1+ | p1- | p2+ | p2- | p3+ | p3-]`. `lens[i]` counts both halves of
/// factor `i` and is even.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct ProductForm<D> {
    pub data: D,
    pub n: usize,
    pub lens: [usize; 3],
}

pub type ProductFormOwned = ProductForm<Vec<u16>>;

impl<D: AsRef<[u16]>> ProductForm<D> {
    pub fn new(data: D, n: usize, p1_len: usize, p2_len: usize, p3_len: usize) -> Self {
        Self {
            data,
            n,
            lens: [p1_len, p2_len, p3_len],
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of index words the three factors occupy, saturating at
    /// `usize::MAX` for length fields no buffer can hold.
    pub fn index_len(&self) -> usize {
        self.lens.iter().copied().fold(0usize, usize::saturating_add)
    }

    /// Largest per-sign block, i.e. the index scratch one multiplication needs.
    pub fn max_half(&self) -> usize {
        self.lens.iter().copied().max().unwrap_or(0) >> 1
    }

    /// Validates the length fields against the stored indices.
    pub fn check(&self) -> Result<(), RingError> {
        for (i, &len) in self.lens.iter().enumerate() {
            if len & 1 == 1 {
                return Err(RingError::OddComponentLength { component: i + 1, len });
            }
        }
        let required: usize = self.index_len();
        let capacity: usize = self.data.as_ref().len();
        if required > capacity {
            return Err(RingError::IndexCapacityExceeded { required, capacity });
        }
        check_indices(&self.data.as_ref()[..required], self.n)
    }

    /// Factor `i` (0, 1 or 2) as a sparse ternary view.
    ///
    /// # Panics
    /// Panics if the length fields exceed the stored indices; call
    /// [`ProductForm::check`] first on untrusted input.
    pub fn component(&self, i: usize) -> SparseTernary<&[u16]> {
        let start: usize = self.lens[..i].iter().sum();
        SparseTernary::new(&self.data.as_ref()[start..start + self.lens[i]], self.n)
    }

    /// Signed dense expansion of `p1*p2 + p3` in `Z[X]/(X^N - 1)`.
    pub fn expand(&self) -> Vec<i64> {
        let mut res: Vec<i64> = cyclic_mul_i64(&self.component(0).expand(), &self.component(1).expand());
        res.iter_mut()
            .zip(self.component(2).expand())
            .for_each(|(r, c)| *r += c);
        res
    }
}
