use crate::hal::{
    api::RingMod3,
    layouts::{Backend, Module},
};

/// Counts the 16-bit inputs on which `module.mod3(x) != x % 3`.
pub fn mod3_mismatches<M: RingMod3>(module: &M) -> usize {
    (0..=u16::MAX).filter(|&x| module.mod3(x) != x % 3).count()
}

pub fn test_mod3_exhaustive<B: Backend>(module: &Module<B>)
where
    Module<B>: RingMod3,
{
    assert_eq!(mod3_mismatches(module), 0);
}

pub fn test_mod3_cross<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: RingMod3,
    Module<BT>: RingMod3,
{
    for x in 0..=u16::MAX {
        assert_eq!(module_ref.mod3(x), module_test.mod3(x), "x = {x}");
    }
}
