use crate::{
    RingError,
    hal::{
        api::{RingConvAdd, RingConvSub, RingMod3, RingMulSparse, RingMulTernary},
        delegates::{check_operand, check_scratch},
        layouts::{
            Backend, DensePoly, DensePolyToMut, DensePolyToRef, Module, ProductForm, Scratch, SparseTernary, check_indices,
        },
        oep::{RingConvAddImpl, RingConvSubImpl, RingMod3Impl, RingMulSparseImpl, RingMulTernaryImpl},
    },
};

impl<B> RingConvAdd for Module<B>
where
    B: Backend + RingConvAddImpl<B>,
{
    fn ring_conv_add<R, A>(&self, res: &mut R, a: &A, idx: &mut [u16]) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
    {
        let res: &mut DensePoly<&mut [u16]> = &mut res.to_mut();
        let a: &DensePoly<&[u16]> = &a.to_ref();
        check_operand(self, &res.to_ref(), false)?;
        check_operand(self, a, true)?;
        check_indices(idx, self.n())?;
        B::ring_conv_add_impl(self, res.raw_mut(), a.raw(), idx);
        Ok(())
    }
}

impl<B> RingConvSub for Module<B>
where
    B: Backend + RingConvSubImpl<B>,
{
    fn ring_conv_sub<R, A>(&self, res: &mut R, a: &A, idx: &mut [u16]) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
    {
        let res: &mut DensePoly<&mut [u16]> = &mut res.to_mut();
        let a: &DensePoly<&[u16]> = &a.to_ref();
        check_operand(self, &res.to_ref(), false)?;
        check_operand(self, a, true)?;
        check_indices(idx, self.n())?;
        B::ring_conv_sub_impl(self, res.raw_mut(), a.raw(), idx);
        Ok(())
    }
}

impl<B> RingMulTernary for Module<B>
where
    B: Backend + RingMulTernaryImpl<B>,
{
    fn ring_mul_ternary_tmp_len(&self, weight: usize) -> usize {
        weight
    }

    fn ring_mul_ternary<R, A, D>(&self, res: &mut R, a: &A, b: &SparseTernary<D>, scratch: &mut Scratch) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
        D: AsRef<[u16]>,
    {
        let res: &mut DensePoly<&mut [u16]> = &mut res.to_mut();
        let a: &DensePoly<&[u16]> = &a.to_ref();
        check_operand(self, &res.to_ref(), false)?;
        check_operand(self, a, true)?;
        if b.n() != self.n() {
            return Err(RingError::DegreeMismatch {
                expected: self.n(),
                actual: b.n(),
            });
        }
        b.check()?;
        check_scratch(scratch, self.ring_mul_ternary_tmp_len(b.weight()))?;
        let (tmp, _) = scratch.take_slice(b.weight());
        B::ring_mul_ternary_impl(self, res.raw_mut(), a.raw(), b.indices(), tmp);
        Ok(())
    }
}

impl<B> RingMulSparse for Module<B>
where
    B: Backend + RingMulSparseImpl<B>,
{
    fn ring_mul_sparse_tmp_len<D>(&self, b: &ProductForm<D>) -> usize
    where
        D: AsRef<[u16]>,
    {
        self.padded_len() + b.max_half()
    }

    fn ring_mul_sparse<R, A, D>(
        &self,
        res: &mut R,
        a: &A,
        b: &ProductForm<D>,
        q: u32,
        scratch: &mut Scratch,
    ) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
        D: AsRef<[u16]>,
    {
        let res: &mut DensePoly<&mut [u16]> = &mut res.to_mut();
        let a: &DensePoly<&[u16]> = &a.to_ref();
        let q_mask: u16 = crate::modulus_mask(q)?;
        check_operand(self, &res.to_ref(), false)?;
        check_operand(self, a, true)?;
        if b.n() != self.n() {
            return Err(RingError::DegreeMismatch {
                expected: self.n(),
                actual: b.n(),
            });
        }
        b.check()?;
        check_scratch(scratch, self.ring_mul_sparse_tmp_len(b))?;

        let (rtmp, scratch) = scratch.take_slice(self.padded_len());
        let (btmp, _) = scratch.take_slice(b.max_half());
        B::ring_mul_sparse_impl(self, res.raw_mut(), a.raw(), b.data.as_ref(), b.lens, q_mask, rtmp, btmp);
        res.sync_tail();
        Ok(())
    }
}

impl<B> RingMod3 for Module<B>
where
    B: Backend + RingMod3Impl<B>,
{
    fn mod3(&self, x: u16) -> u16 {
        B::ring_mod3_impl(x)
    }
}
