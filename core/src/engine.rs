//! Runtime selection between the portable and the accelerated backend.

use std::{fmt, str::FromStr};

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use sparse_ring_backend::CpuSimd;
use sparse_ring_backend::{
    CpuRef, RingError,
    hal::{
        api::{ModuleNew, RingConvAdd, RingConvSub, RingMod3, RingMulSparse, RingMulTernary},
        layouts::{
            DensePoly, DensePolyOwned, DensePolyToMut, DensePolyToRef, Module, ProductForm, ProductFormOwned, Scratch,
            ScratchOwned, SparseTernary,
        },
    },
};
use sparse_ring_sampling::{Source, fill_uniform, sample_product_form_indices};
use tracing::{info, instrument, warn};

use crate::{ConfigError, RingParams};

/// Environment variable read by [`EngineConfig::from_env`].
pub const BACKEND_ENV: &str = "SPARSE_RING_BACKEND";

/// Which ring-multiply strategy an engine should run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Portable kernels, available everywhere.
    Reference,
    /// Accelerated kernels; fails if they are not compiled in or the CPU
    /// cannot run them.
    Simd,
    /// Accelerated if possible, portable otherwise.
    #[default]
    Auto,
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" | "ref" | "portable" => Ok(Self::Reference),
            "simd" | "sse2" | "accelerated" => Ok(Self::Simd),
            "auto" | "" => Ok(Self::Auto),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reference => "reference",
            Self::Simd => "simd",
            Self::Auto => "auto",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub params: RingParams,
    pub backend: BackendKind,
}

impl EngineConfig {
    pub fn new(params: RingParams) -> Self {
        Self {
            params,
            backend: BackendKind::Auto,
        }
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Reads the backend choice from [`BACKEND_ENV`]; unset means `Auto`.
    pub fn from_env(params: RingParams) -> Result<Self, ConfigError> {
        Self::from_var(params, std::env::var(BACKEND_ENV).ok().as_deref())
    }

    pub fn from_var(params: RingParams, value: Option<&str>) -> Result<Self, ConfigError> {
        let backend: BackendKind = match value {
            Some(v) => v.parse()?,
            None => BackendKind::Auto,
        };
        Ok(Self::new(params).with_backend(backend))
    }
}

enum EngineBackend {
    Reference(Module<CpuRef>),
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    Simd(Module<CpuSimd>),
}

macro_rules! dispatch {
    ($engine:expr, $module:ident => $body:expr) => {
        match &$engine.backend {
            EngineBackend::Reference($module) => $body,
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            EngineBackend::Simd($module) => $body,
        }
    };
}

/// A parameter set bound to the backend chosen at construction.
///
/// All arithmetic goes through the [`sparse_ring_backend::hal::api`]
/// traits, so the engine validates exactly like a bare `Module` would.
pub struct RingEngine {
    params: RingParams,
    backend: EngineBackend,
}

impl RingEngine {
    #[instrument(skip_all, fields(params = config.params.name, requested = %config.backend))]
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.params.validate()?;
        let n: usize = config.params.n;

        let backend: EngineBackend = match config.backend {
            BackendKind::Reference => EngineBackend::Reference(Module::<CpuRef>::try_new(n)?),
            BackendKind::Simd => Self::simd(n)?,
            BackendKind::Auto => match Self::simd(n) {
                Ok(backend) => backend,
                Err(err) => {
                    warn!(%err, "accelerated backend unavailable, using the portable one");
                    EngineBackend::Reference(Module::<CpuRef>::try_new(n)?)
                }
            },
        };

        let engine: RingEngine = Self {
            params: config.params,
            backend,
        };
        info!(backend = engine.backend_name(), n, q = config.params.q, "ring engine ready");
        Ok(engine)
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    fn simd(n: usize) -> Result<EngineBackend, RingError> {
        Ok(EngineBackend::Simd(Module::<CpuSimd>::try_new(n)?))
    }

    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    fn simd(_n: usize) -> Result<EngineBackend, RingError> {
        Err(RingError::BackendUnavailable {
            backend: "cpu_simd",
            reason: "not compiled for this target",
        })
    }

    pub fn params(&self) -> &RingParams {
        &self.params
    }

    pub fn n(&self) -> usize {
        self.params.n
    }

    pub fn backend_name(&self) -> &'static str {
        dispatch!(self, m => m.backend_name())
    }

    pub fn alloc_dense(&self) -> DensePolyOwned {
        DensePoly::alloc(self.params.n)
    }

    /// Scratch sized for [`RingEngine::mul_sparse`] with this parameter set.
    pub fn alloc_scratch(&self) -> ScratchOwned {
        ScratchOwned::alloc(self.params.scratch_len())
    }

    /// Uniform dense polynomial modulo `q`, tail in sync.
    pub fn sample_dense(&self, source: &mut Source) -> DensePolyOwned {
        let mut a: DensePolyOwned = self.alloc_dense();
        fill_uniform(source, self.params.q, a.coeffs_mut());
        a.sync_tail();
        a
    }

    /// Product-form polynomial with this parameter set's weights.
    pub fn sample_product_form(&self, source: &mut Source) -> ProductFormOwned {
        let RingParams { n, df1, df2, df3, .. } = self.params;
        let [l1, l2, l3] = self.params.product_form_lens();
        ProductForm::new(sample_product_form_indices(source, n, df1, df2, df3), n, l1, l2, l3)
    }

    pub fn conv_add<R, A>(&self, res: &mut R, a: &A, idx: &mut [u16]) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
    {
        dispatch!(self, m => m.ring_conv_add(res, a, idx))
    }

    pub fn conv_sub<R, A>(&self, res: &mut R, a: &A, idx: &mut [u16]) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
    {
        dispatch!(self, m => m.ring_conv_sub(res, a, idx))
    }

    pub fn mul_ternary<R, A, D>(&self, res: &mut R, a: &A, b: &SparseTernary<D>, scratch: &mut Scratch) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
        D: AsRef<[u16]>,
    {
        dispatch!(self, m => m.ring_mul_ternary(res, a, b, scratch))
    }

    /// `res = a * b mod (X^N - 1, q)` with `q` from the parameter set.
    pub fn mul_sparse<R, A, D>(&self, res: &mut R, a: &A, b: &ProductForm<D>, scratch: &mut Scratch) -> Result<(), RingError>
    where
        R: DensePolyToMut,
        A: DensePolyToRef,
        D: AsRef<[u16]>,
    {
        dispatch!(self, m => m.ring_mul_sparse(res, a, b, self.params.q, scratch))
    }

    pub fn mod3(&self, x: u16) -> u16 {
        dispatch!(self, m => m.mod3(x))
    }
}

impl fmt::Debug for RingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingEngine")
            .field("params", &self.params.name)
            .field("backend", &self.backend_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use sparse_ring_backend::reference::naive::ring_mul_naive;

    use super::*;

    #[test]
    fn parses_backend_names() {
        assert_eq!("Reference".parse::<BackendKind>(), Ok(BackendKind::Reference));
        assert_eq!(" simd ".parse::<BackendKind>(), Ok(BackendKind::Simd));
        assert_eq!("".parse::<BackendKind>(), Ok(BackendKind::Auto));
        assert_eq!(
            "avx512".parse::<BackendKind>(),
            Err(ConfigError::UnknownBackend("avx512".to_string()))
        );
        assert_eq!(BackendKind::Simd.to_string().parse::<BackendKind>(), Ok(BackendKind::Simd));
    }

    #[test]
    fn config_from_variable() {
        let params: RingParams = RingParams::EES401EP2;
        assert_eq!(EngineConfig::from_var(params, None), Ok(EngineConfig::new(params)));
        assert_eq!(
            EngineConfig::from_var(params, Some("ref")).map(|c| c.backend),
            Ok(BackendKind::Reference)
        );
        assert!(EngineConfig::from_var(params, Some("gpu")).is_err());
    }

    #[test]
    fn reference_is_always_available() {
        let engine: RingEngine =
            RingEngine::new(EngineConfig::new(RingParams::TOY11).with_backend(BackendKind::Reference)).unwrap();
        assert_eq!(engine.backend_name(), "cpu_ref");
        assert_eq!(engine.n(), 11);
    }

    #[test]
    fn auto_picks_a_backend() {
        let engine: RingEngine = RingEngine::new(EngineConfig::new(RingParams::EES401EP2)).unwrap();
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        assert_eq!(engine.backend_name(), "cpu_simd");
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        assert_eq!(engine.backend_name(), "cpu_ref");
    }

    #[test]
    fn rejects_invalid_params() {
        let mut params: RingParams = RingParams::EES401EP2;
        params.q = 2047;
        assert_eq!(RingEngine::new(EngineConfig::new(params)).err(), Some(ConfigError::Ring(RingError::InvalidModulus(2047))));
    }

    #[test]
    fn mul_sparse_matches_schoolbook() {
        let mut source: Source = Source::new([3u8; 32]);
        for kind in [BackendKind::Reference, BackendKind::Auto] {
            let engine: RingEngine = RingEngine::new(EngineConfig::new(RingParams::EES439EP1).with_backend(kind)).unwrap();
            let a: DensePolyOwned = engine.sample_dense(&mut source);
            let b: ProductFormOwned = engine.sample_product_form(&mut source);
            let mut res: DensePolyOwned = engine.alloc_dense();
            let mut scratch: ScratchOwned = engine.alloc_scratch();
            engine.mul_sparse(&mut res, &a, &b, scratch.borrow()).unwrap();

            let mut want: Vec<u16> = vec![0; engine.n()];
            ring_mul_naive(&mut want, a.coeffs(), &b.expand());
            want.iter_mut().for_each(|x| *x &= engine.params().coeff_mask());
            assert_eq!(res.coeffs(), &want[..], "{kind}");
        }
    }

    #[test]
    fn mod3_through_engine() {
        let engine: RingEngine = RingEngine::new(EngineConfig::new(RingParams::TOY11)).unwrap();
        for x in [0u16, 1, 2, 3, 255, 256, 0x7FFF, u16::MAX] {
            assert_eq!(engine.mod3(x), x % 3);
        }
    }
}
