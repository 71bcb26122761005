use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sparse_ring_backend::{
    CpuRef,
    hal::{
        api::{ModuleNew, RingConvAdd, RingMulSparse},
        layouts::{Backend, DensePoly, DensePolyOwned, Module, ProductForm, ProductFormOwned, ScratchOwned},
    },
};
use sparse_ring_sampling::{Source, fill_uniform, sample_product_form_indices, sample_ternary_indices};

fn conv_runner<B: Backend>(n: usize, weight: usize) -> impl FnMut()
where
    Module<B>: ModuleNew<B> + RingConvAdd,
{
    let mut source: Source = Source::new([0u8; 32]);
    let module: Module<B> = Module::<B>::new(n);

    let mut a: DensePolyOwned = DensePoly::alloc(n);
    fill_uniform(&mut source, 2048, a.coeffs_mut());
    a.sync_tail();
    let mut idx: Vec<u16> = Vec::new();
    sample_ternary_indices(&mut source, n, weight, &mut idx);
    let mut res: DensePolyOwned = DensePoly::alloc(n);
    let mut work: Vec<u16> = idx.clone();

    move || {
        work.copy_from_slice(&idx);
        module.ring_conv_add(&mut res, &a, &mut work).unwrap();
        black_box(&res);
    }
}

fn sparse_runner<B: Backend>(n: usize, d: [usize; 3]) -> impl FnMut()
where
    Module<B>: ModuleNew<B> + RingMulSparse,
{
    let mut source: Source = Source::new([1u8; 32]);
    let module: Module<B> = Module::<B>::new(n);

    let mut a: DensePolyOwned = DensePoly::alloc(n);
    fill_uniform(&mut source, 2048, a.coeffs_mut());
    a.sync_tail();
    let b: ProductFormOwned = ProductForm::new(
        sample_product_form_indices(&mut source, n, d[0], d[1], d[2]),
        n,
        2 * d[0],
        2 * d[1],
        2 * d[2],
    );
    let mut res: DensePolyOwned = DensePoly::alloc(n);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(module.ring_mul_sparse_tmp_len(&b));

    move || {
        module.ring_mul_sparse(&mut res, &a, &b, 2048, scratch.borrow()).unwrap();
        black_box(&res);
    }
}

fn bench_ring_conv_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_conv_add");
    for (n, weight) in [(401usize, 8usize), (743, 11)] {
        let id: BenchmarkId = BenchmarkId::new(CpuRef::NAME, format!("n: {n}"));
        let mut runner = conv_runner::<CpuRef>(n, weight);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));

        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            use sparse_ring_backend::CpuSimd;
            let id: BenchmarkId = BenchmarkId::new(CpuSimd::NAME, format!("n: {n}"));
            let mut runner = conv_runner::<CpuSimd>(n, weight);
            group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
        }
    }
    group.finish();
}

fn bench_ring_mul_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_mul_sparse");
    for (n, d) in [(401usize, [8usize, 8, 6]), (743, [11, 11, 15])] {
        let id: BenchmarkId = BenchmarkId::new(CpuRef::NAME, format!("n: {n}"));
        let mut runner = sparse_runner::<CpuRef>(n, d);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));

        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            use sparse_ring_backend::CpuSimd;
            let id: BenchmarkId = BenchmarkId::new(CpuSimd::NAME, format!("n: {n}"));
            let mut runner = sparse_runner::<CpuSimd>(n, d);
            group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
        }
    }
    group.finish();
}

criterion_group!(benches, bench_ring_conv_add, bench_ring_mul_sparse);
criterion_main!(benches);
