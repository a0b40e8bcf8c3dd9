#![no_main]

use arbitrary::Arbitrary;
use fadv_optimizer::{AcceleratorVersion, RadixTable, filter_good_set, generate_candidates};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct CandidateInput {
    num: u32,
    crop: bool,
    is_float: bool,
}

fuzz_target!(|input: CandidateInput| {
    let num = (input.num % 1_000_000).max(1) as usize;
    let Ok(table) = RadixTable::for_version(AcceleratorVersion::V8) else {
        return;
    };
    let polys = generate_candidates(num, table.limits(input.is_float), input.crop);
    for p in &polys {
        assert_eq!(p.value % 2, 0);
        if input.crop {
            assert!(p.value <= num as u64);
        } else {
            assert!(p.value >= num as u64);
        }
    }
    assert!(!filter_good_set(&polys).is_empty());
});
