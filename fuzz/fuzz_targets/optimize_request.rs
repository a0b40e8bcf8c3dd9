#![no_main]

use arbitrary::Arbitrary;
use fadv_optimizer::{AcceleratorVersion, OptimizeOptions, SizeOptimizer};
use fadv_transform::{GeneralTransform, Tristate};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RequestInput {
    x: u16,
    y: u8,
    z: u8,
    n: u8,
    flags: [u8; 5],
    n_best: u8,
    perc: u8,
    max_mem_mb: u16,
    square_only: bool,
    crop: bool,
    transpose: bool,
}

fn tristate(raw: u8) -> Tristate {
    match raw % 3 {
        0 => Tristate::True,
        1 => Tristate::False,
        _ => Tristate::Both,
    }
}

fuzz_target!(|input: RequestInput| {
    let [batched, float, forward, in_place, real] = input.flags.map(tristate);
    let request = GeneralTransform::new(
        0,
        usize::from(input.x).max(1),
        usize::from(input.y).max(1),
        usize::from(input.z).max(1),
        usize::from(input.n).max(1),
        batched,
        float,
        forward,
        in_place,
        real,
    );
    let Ok(optimizer) = SizeOptimizer::new(AcceleratorVersion::V8, request, input.transpose) else {
        return;
    };
    let opts = OptimizeOptions::default()
        .with_n_best(usize::from(input.n_best % 16).max(1))
        .with_max_perc_increase(u32::from(input.perc % 100))
        .with_max_mem_mb(u64::from(input.max_mem_mb))
        .with_square_only(input.square_only)
        .with_crop(input.crop);
    let result = optimizer.optimize(&opts);
    assert!(result.len() <= opts.n_best);
    assert!(result.iter().all(|t| t.n <= usize::from(input.n).max(1)));
});
