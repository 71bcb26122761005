//! Validation errors for the safe ring-arithmetic API.

use thiserror::Error;

/// Errors reported by the safe [`crate::hal::api`] layer.
///
/// The raw kernels in [`crate::reference`] and the backend types do not
/// validate; these are the checks the api performs before calling them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// Ring degree outside the range the kernel layout supports.
    #[error("unsupported ring degree {n}: expected {min} <= N <= {max}")]
    UnsupportedDegree { n: usize, min: usize, max: usize },

    /// An operand was built for a different ring degree than the module.
    #[error("degree mismatch: module has N = {expected}, operand has N = {actual}")]
    DegreeMismatch { expected: usize, actual: usize },

    /// A dense buffer does not have the `N + 7` wraparound length.
    #[error("dense buffer holds {actual} words, expected N + 7 = {expected}")]
    DenseLength { expected: usize, actual: usize },

    /// A dense operand's last seven words do not mirror its first seven.
    #[error("dense operand tail is out of sync with its first {0} coefficients")]
    TailOutOfSync(usize),

    /// A sparse component length is odd, so it cannot split into +1 and -1 halves.
    #[error("sparse component {component} has odd length {len}")]
    OddComponentLength { component: usize, len: usize },

    /// A sparse ternary index list does not split into two equal halves.
    #[error("sparse ternary has {plus} positive and {minus} negative positions")]
    UnbalancedTernary { plus: usize, minus: usize },

    /// The component lengths add up to more indices than are stored.
    #[error("component lengths need {required} indices but only {capacity} are stored")]
    IndexCapacityExceeded { required: usize, capacity: usize },

    /// A sparse position does not lie in `[0, N)`.
    #[error("index {index} at position {position} is outside [0, {n})")]
    IndexOutOfRange { position: usize, index: u16, n: usize },

    /// The caller-supplied scratch region is too small.
    #[error("scratch holds {available} words, {required} required")]
    ScratchTooSmall { required: usize, available: usize },

    /// The coefficient modulus is not a power of two in `[2, 2^16]`.
    #[error("coefficient modulus {0} is not a power of two in [2, 65536]")]
    InvalidModulus(u32),

    /// The requested backend cannot run on this machine.
    #[error("backend {backend} unavailable: {reason}")]
    BackendUnavailable { backend: &'static str, reason: &'static str },
}
