//! Portable backend: plain Rust kernels from [`crate::reference`].

mod module;
mod ring_mul;

#[cfg(test)]
mod tests;

/// Portable strategy. Runs everywhere and serves as the oracle the
/// accelerated backend is checked against.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuRef;
