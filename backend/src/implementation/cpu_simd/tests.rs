use crate::{
    CpuSimd,
    hal::{api::ModuleNew, layouts::Module},
    implementation::cpu_simd::mod3_fold,
    test_suite::{conv, mod3, sparse},
};

crate::backend_test_suite! {
    mod toy11,
    backend = crate::CpuSimd,
    size = 11,
    tests = {
        ring_conv_kat11 => crate::test_suite::sparse::test_ring_conv_kat11,
        ring_mul_ternary_kat11 => crate::test_suite::sparse::test_ring_mul_ternary_kat11,
        ring_conv_monomial => crate::test_suite::conv::test_ring_conv_monomial,
        ring_conv_matches_naive => crate::test_suite::conv::test_ring_conv_matches_naive,
        ring_mul_sparse_matches_expansion => crate::test_suite::sparse::test_ring_mul_sparse_matches_expansion,
    }
}

crate::backend_test_suite! {
    mod ees401,
    backend = crate::CpuSimd,
    size = 401,
    tests = {
        ring_mul_sparse_kat401 => crate::test_suite::sparse::test_ring_mul_sparse_kat401,
        ring_conv_monomial => crate::test_suite::conv::test_ring_conv_monomial,
        ring_conv_matches_naive => crate::test_suite::conv::test_ring_conv_matches_naive,
        ring_conv_linearity => crate::test_suite::conv::test_ring_conv_linearity,
        ring_conv_add_sub_inverse => crate::test_suite::conv::test_ring_conv_add_sub_inverse,
        ring_conv_rejects_bad_input => crate::test_suite::conv::test_ring_conv_rejects_bad_input,
        ring_mul_sparse_matches_expansion => crate::test_suite::sparse::test_ring_mul_sparse_matches_expansion,
        ring_mul_sparse_chained => crate::test_suite::sparse::test_ring_mul_sparse_chained,
        ring_mul_sparse_rejects_bad_input => crate::test_suite::sparse::test_ring_mul_sparse_rejects_bad_input,
    }
}

crate::backend_test_suite! {
    mod multiple_of_eight,
    backend = crate::CpuSimd,
    size = 64,
    tests = {
        ring_conv_monomial => crate::test_suite::conv::test_ring_conv_monomial,
        ring_conv_linearity => crate::test_suite::conv::test_ring_conv_linearity,
        ring_mul_sparse_matches_expansion => crate::test_suite::sparse::test_ring_mul_sparse_matches_expansion,
    }
}

crate::cross_backend_test_suite! {
    mod cross11,
    backend_ref = crate::CpuRef,
    backend_test = crate::CpuSimd,
    size = 11,
    tests = {
        ring_conv => crate::test_suite::sparse::test_cross_ring_conv,
        ring_mul_sparse => crate::test_suite::sparse::test_cross_ring_mul_sparse,
    }
}

crate::cross_backend_test_suite! {
    mod cross401,
    backend_ref = crate::CpuRef,
    backend_test = crate::CpuSimd,
    size = 401,
    tests = {
        ring_conv => crate::test_suite::sparse::test_cross_ring_conv,
        ring_mul_sparse => crate::test_suite::sparse::test_cross_ring_mul_sparse,
        mod3 => crate::test_suite::mod3::test_mod3_cross,
    }
}

crate::cross_backend_test_suite! {
    mod cross743,
    backend_ref = crate::CpuRef,
    backend_test = crate::CpuSimd,
    size = 743,
    tests = {
        ring_conv => crate::test_suite::sparse::test_cross_ring_conv,
        ring_mul_sparse => crate::test_suite::sparse::test_cross_ring_mul_sparse,
    }
}

#[test]
fn mod3_fold_exhaustive() {
    for x in 0..=u16::MAX {
        assert_eq!(mod3_fold(x), x % 3, "x = {x}");
    }
}

#[test]
fn mod3_cpu_simd() {
    let module: Module<CpuSimd> = Module::<CpuSimd>::new(8);
    mod3::test_mod3_exhaustive(&module);
}

#[test]
fn smallest_degree() {
    let module: Module<CpuSimd> = Module::<CpuSimd>::new(8);
    conv::test_ring_conv_monomial(&module);
    sparse::test_ring_mul_sparse_matches_expansion(&module);
}
