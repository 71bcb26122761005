pub mod cpu_ref;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod cpu_simd;
