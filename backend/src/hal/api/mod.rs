mod module;
mod ring_mul;

pub use module::*;
pub use ring_mul::*;
