use criterion::{Criterion, criterion_group, criterion_main};
use fadv_optimizer::{
    AcceleratorVersion, OptimizeOptions, RadixTable, SizeOptimizer, filter_good_set,
    generate_candidates,
};
use fadv_transform::{GeneralTransform, Tristate};

fn request(x: usize, y: usize, z: usize) -> GeneralTransform {
    GeneralTransform::new(
        0,
        x,
        y,
        z,
        64,
        Tristate::Both,
        Tristate::Both,
        Tristate::Both,
        Tristate::Both,
        Tristate::Both,
    )
}

fn bench_generate_candidates(c: &mut Criterion) {
    let limits = RadixTable::for_version(AcceleratorVersion::V8)
        .unwrap()
        .limits(true);
    for &num in &[1000usize, 100_000] {
        c.bench_function(&format!("generate_candidates_pad_{num}"), |b| {
            b.iter(|| generate_candidates(num, limits, false));
        });
        c.bench_function(&format!("filter_good_set_crop_{num}"), |b| {
            b.iter(|| filter_good_set(&generate_candidates(num, limits, true)));
        });
    }
}

fn bench_optimize(c: &mut Criterion) {
    let opts = OptimizeOptions::default()
        .with_n_best(10)
        .with_max_perc_increase(20)
        .with_max_mem_mb(8192);

    let line = SizeOptimizer::new(AcceleratorVersion::V8, request(4001, 1, 1), true).unwrap();
    c.bench_function("optimize_1d_4001_batched", |b| {
        b.iter(|| line.optimize(&opts));
    });

    let plane = SizeOptimizer::new(AcceleratorVersion::V8, request(1000, 700, 1), true).unwrap();
    c.bench_function("optimize_2d_1000x700_transposed", |b| {
        b.iter(|| plane.optimize(&opts));
    });

    let volume = SizeOptimizer::new(AcceleratorVersion::V8, request(250, 250, 130), false).unwrap();
    c.bench_function("optimize_3d_250x250x130", |b| {
        b.iter(|| volume.optimize(&opts));
    });
}

criterion_group!(benches, bench_generate_candidates, bench_optimize);
criterion_main!(benches);
