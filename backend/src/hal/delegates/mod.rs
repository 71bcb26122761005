mod module;
mod ring_mul;

use crate::{
    RingError,
    hal::layouts::{Backend, DensePoly, Module, Scratch},
};

fn check_operand<B: Backend, D: AsRef<[u16]>>(module: &Module<B>, a: &DensePoly<D>, synced: bool) -> Result<(), RingError> {
    if a.n() != module.n() {
        return Err(RingError::DegreeMismatch {
            expected: module.n(),
            actual: a.n(),
        });
    }
    a.check_layout()?;
    if synced && !a.is_tail_synced() {
        return Err(RingError::TailOutOfSync(crate::TAIL_LEN));
    }
    Ok(())
}

fn check_scratch(scratch: &Scratch, required: usize) -> Result<(), RingError> {
    if scratch.available() < required {
        return Err(RingError::ScratchTooSmall {
            required,
            available: scratch.available(),
        });
    }
    Ok(())
}
