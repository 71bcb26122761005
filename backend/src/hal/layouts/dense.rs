use std::fmt;

use crate::{RingError, TAIL_LEN, padded_len};

/// A dense polynomial of degree `n` in the wraparound layout.
///
/// `data` holds `n + 7` words: the `n` coefficients followed by a copy of
/// the first seven. Kernels read eight consecutive words starting at any
/// offset in `[0, n)` and rely on the tail to supply the wrapped values.
///
/// The type parameter `D` controls ownership: `Vec<u16>` for owned,
/// `&[u16]` for shared borrows, `&mut [u16]` for mutable borrows.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct DensePoly<D> {
    pub data: D,
    pub n: usize,
}

pub type DensePolyOwned = DensePoly<Vec<u16>>;

impl DensePoly<Vec<u16>> {
    /// Allocates a zero polynomial of degree `n`.
    pub fn alloc(n: usize) -> Self {
        Self {
            data: vec![0u16; padded_len(n)],
            n,
        }
    }

    /// Builds a polynomial from its `n` coefficients and synchronises the tail.
    pub fn from_coeffs(coeffs: &[u16]) -> Self {
        let mut res: Self = Self::alloc(coeffs.len());
        res.coeffs_mut().copy_from_slice(coeffs);
        res.sync_tail();
        res
    }
}

impl<D: AsRef<[u16]>> DensePoly<D> {
    /// Wraps an existing `n + 7` word buffer.
    pub fn from_data(data: D, n: usize) -> Result<Self, RingError> {
        let actual: usize = data.as_ref().len();
        if actual != padded_len(n) {
            return Err(RingError::DenseLength {
                expected: padded_len(n),
                actual,
            });
        }
        Ok(Self { data, n })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// The whole backing buffer, tail included.
    #[inline]
    pub fn raw(&self) -> &[u16] {
        self.data.as_ref()
    }

    /// The `n` coefficients.
    #[inline]
    pub fn coeffs(&self) -> &[u16] {
        &self.raw()[..self.n]
    }

    #[inline]
    pub fn tail(&self) -> &[u16] {
        &self.raw()[self.n..]
    }

    /// Returns true if words `[n, n+7)` mirror words `[0, 7)`.
    pub fn is_tail_synced(&self) -> bool {
        let raw: &[u16] = self.raw();
        raw.len() == padded_len(self.n) && raw[self.n..] == raw[..TAIL_LEN]
    }

    pub(crate) fn check_layout(&self) -> Result<(), RingError> {
        let actual: usize = self.raw().len();
        if actual != padded_len(self.n) {
            return Err(RingError::DenseLength {
                expected: padded_len(self.n),
                actual,
            });
        }
        Ok(())
    }
}

impl<D: AsRef<[u16]> + AsMut<[u16]>> DensePoly<D> {
    #[inline]
    pub fn raw_mut(&mut self) -> &mut [u16] {
        self.data.as_mut()
    }

    #[inline]
    pub fn coeffs_mut(&mut self) -> &mut [u16] {
        let n: usize = self.n;
        &mut self.raw_mut()[..n]
    }

    /// Copies the first seven coefficients into the tail.
    ///
    /// Must run after any operation that writes the coefficients of a
    /// polynomial that will be read again as a kernel operand.
    pub fn sync_tail(&mut self) {
        let n: usize = self.n;
        self.raw_mut().copy_within(..TAIL_LEN, n);
    }

    pub fn zero(&mut self) {
        self.raw_mut().fill(0);
    }

    /// Reduces the `n` coefficients modulo a power of two by `mask = q - 1`.
    /// The tail is left untouched.
    pub fn reduce_mask(&mut self, mask: u16) {
        self.coeffs_mut().iter_mut().for_each(|x| *x &= mask);
    }
}

/// Renders the `n` coefficients as comma-separated hexadecimal words.
impl<D: AsRef<[u16]>> fmt::LowerHex for DensePoly<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, x) in self.coeffs().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:03x}")?;
        }
        write!(f, " }}")
    }
}

pub trait DensePolyToRef {
    fn to_ref(&self) -> DensePoly<&[u16]>;
}

impl<D: AsRef<[u16]>> DensePolyToRef for DensePoly<D> {
    fn to_ref(&self) -> DensePoly<&[u16]> {
        DensePoly {
            data: self.data.as_ref(),
            n: self.n,
        }
    }
}

pub trait DensePolyToMut {
    fn to_mut(&mut self) -> DensePoly<&mut [u16]>;
}

impl<D: AsRef<[u16]> + AsMut<[u16]>> DensePolyToMut for DensePoly<D> {
    fn to_mut(&mut self) -> DensePoly<&mut [u16]> {
        DensePoly {
            data: self.data.as_mut(),
            n: self.n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coeffs_mirrors_head() {
        let a: DensePolyOwned = DensePoly::from_coeffs(&[8, 25, 22, 20, 12, 24, 15, 19, 12, 19, 16]);
        assert_eq!(a.raw().len(), 18);
        assert_eq!(a.tail(), &[8, 25, 22, 20, 12, 24, 15]);
        assert!(a.is_tail_synced());
    }

    #[test]
    fn writes_break_tail_until_synced() {
        let mut a: DensePolyOwned = DensePoly::alloc(11);
        a.coeffs_mut()[3] = 5;
        assert!(!a.is_tail_synced());
        a.sync_tail();
        assert!(a.is_tail_synced());
        assert_eq!(a.raw()[14], 5);
    }

    #[test]
    fn from_data_rejects_short_buffer() {
        let data: Vec<u16> = vec![0; 16];
        assert_eq!(
            DensePoly::from_data(data, 11),
            Err(RingError::DenseLength { expected: 18, actual: 16 })
        );
    }

    #[test]
    fn hex_rendering() {
        let mut a: DensePolyOwned = DensePoly::alloc(8);
        a.coeffs_mut().copy_from_slice(&[0x7ff, 1, 2, 3, 4, 5, 6, 0xa]);
        assert_eq!(format!("{a:x}"), "{ 7ff, 001, 002, 003, 004, 005, 006, 00a }");
    }
}
