use crate::RingError;

/// A sparse polynomial with coefficients in `{-1, 0, 1}`.
///
/// `data` stores the positions of the `+1` coefficients followed by the
/// positions of the `-1` coefficients, both halves of equal length.
/// Zero coefficients are implicit.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct SparseTernary<D> {
    pub data: D,
    pub n: usize,
}

pub type SparseTernaryOwned = SparseTernary<Vec<u16>>;

impl<D: AsRef<[u16]>> SparseTernary<D> {
    pub fn new(data: D, n: usize) -> Self {
        Self { data, n }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        self.data.as_ref()
    }

    /// Number of `+1` (equivalently `-1`) coefficients.
    #[inline]
    pub fn weight(&self) -> usize {
        self.indices().len() >> 1
    }

    pub fn plus(&self) -> &[u16] {
        &self.indices()[..self.weight()]
    }

    pub fn minus(&self) -> &[u16] {
        let w: usize = self.weight();
        &self.indices()[w..2 * w]
    }

    /// Checks the halves are balanced and every position lies in `[0, n)`.
    pub fn check(&self) -> Result<(), RingError> {
        let len: usize = self.indices().len();
        if len & 1 == 1 {
            return Err(RingError::UnbalancedTernary {
                plus: len >> 1,
                minus: len - (len >> 1),
            });
        }
        check_indices(self.indices(), self.n)
    }

    /// Signed dense coefficients, with repeated positions summed.
    pub fn expand(&self) -> Vec<i64> {
        let mut res: Vec<i64> = vec![0; self.n];
        self.plus().iter().for_each(|&i| res[i as usize] += 1);
        self.minus().iter().for_each(|&i| res[i as usize] -= 1);
        res
    }
}

pub(crate) fn check_indices(indices: &[u16], n: usize) -> Result<(), RingError> {
    match indices.iter().position(|&i| i as usize >= n) {
        Some(position) => Err(RingError::IndexOutOfRange {
            position,
            index: indices[position],
            n,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_and_expansion() {
        let b: SparseTernary<&[u16]> = SparseTernary::new(&[2u16, 3, 4, 0, 5, 7][..], 11);
        assert_eq!(b.plus(), &[2, 3, 4]);
        assert_eq!(b.minus(), &[0, 5, 7]);
        assert_eq!(b.expand(), vec![-1, 0, 1, 1, 1, -1, 0, -1, 0, 0, 0]);
        assert!(b.check().is_ok());
    }

    #[test]
    fn rejects_odd_and_out_of_range() {
        let odd: SparseTernary<&[u16]> = SparseTernary::new(&[1u16, 2, 3][..], 11);
        assert!(matches!(odd.check(), Err(RingError::UnbalancedTernary { .. })));
        let far: SparseTernary<&[u16]> = SparseTernary::new(&[1u16, 11][..], 11);
        assert_eq!(
            far.check(),
            Err(RingError::IndexOutOfRange {
                position: 1,
                index: 11,
                n: 11
            })
        );
    }
}
