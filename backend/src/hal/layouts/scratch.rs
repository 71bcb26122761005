use zeroize::Zeroize;

/// Owned temporary region for the sparse multiplier.
///
/// The region receives copies of private-key indices, so it is wiped on drop.
pub struct ScratchOwned {
    pub(crate) data: Vec<u16>,
}

/// Borrowed temporary region, carved front to back by [`Scratch::take_slice`].
#[repr(transparent)]
pub struct Scratch {
    pub(crate) data: [u16],
}

impl ScratchOwned {
    /// Allocates `len` zeroed words.
    pub fn alloc(len: usize) -> Self {
        Self { data: vec![0u16; len] }
    }

    pub fn borrow(&mut self) -> &mut Scratch {
        Scratch::from_slice(&mut self.data)
    }
}

impl Drop for ScratchOwned {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl Scratch {
    pub fn from_slice(data: &mut [u16]) -> &mut Self {
        // SAFETY: `Scratch` is `#[repr(transparent)]` over `[u16]`.
        unsafe { &mut *(data as *mut [u16] as *mut Self) }
    }

    /// Number of words left.
    pub fn available(&self) -> usize {
        self.data.len()
    }

    /// Splits off the first `len` words.
    ///
    /// # Panics
    /// Panics if fewer than `len` words are available.
    pub fn take_slice(&mut self, len: usize) -> (&mut [u16], &mut Self) {
        assert!(
            len <= self.data.len(),
            "scratch holds {} words, {len} requested",
            self.data.len()
        );
        let (take, rem) = self.data.split_at_mut(len);
        (take, Self::from_slice(rem))
    }

    /// Overwrites the whole region with zeros.
    pub fn wipe(&mut self) {
        self.data.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_slice_splits_front_to_back() {
        let mut owned: ScratchOwned = ScratchOwned::alloc(10);
        let scratch: &mut Scratch = owned.borrow();
        let (a, rem) = scratch.take_slice(4);
        a.fill(1);
        assert_eq!(rem.available(), 6);
        let (b, rem) = rem.take_slice(6);
        b.fill(2);
        assert_eq!(rem.available(), 0);
        assert_eq!(owned.data, vec![1, 1, 1, 1, 2, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn wipe_zeroes_region() {
        let mut owned: ScratchOwned = ScratchOwned::alloc(4);
        owned.borrow().take_slice(4).0.fill(0xffff);
        owned.borrow().wipe();
        assert_eq!(owned.data, vec![0; 4]);
    }
}
