use crate::{
    CpuRef,
    hal::{api::ModuleNew, layouts::Module},
    test_suite::{conv, mod3, sparse},
};

crate::backend_test_suite! {
    mod toy11,
    backend = crate::CpuRef,
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
    backend = crate::CpuRef,
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
    backend = crate::CpuRef,
    size = 64,
    tests = {
        ring_conv_monomial => crate::test_suite::conv::test_ring_conv_monomial,
        ring_conv_linearity => crate::test_suite::conv::test_ring_conv_linearity,
        ring_mul_sparse_matches_expansion => crate::test_suite::sparse::test_ring_mul_sparse_matches_expansion,
    }
}

#[test]
fn mod3_cpu_ref() {
    let module: Module<CpuRef> = Module::<CpuRef>::new(8);
    mod3::test_mod3_exhaustive(&module);
}

#[test]
fn smallest_degree() {
    let module: Module<CpuRef> = Module::<CpuRef>::new(8);
    conv::test_ring_conv_monomial(&module);
    sparse::test_ring_mul_sparse_matches_expansion(&module);
}

#[test]
fn rejects_unsupported_degree() {
    assert!(Module::<CpuRef>::try_new(7).is_err());
    assert!(Module::<CpuRef>::try_new(65521).is_err());
    assert!(Module::<CpuRef>::try_new(65520).is_ok());
}
