//! Candidate axis lengths of the form `2^a * 3^b * 5^c * 7^d`.

use std::collections::BTreeMap;

use crate::radix::RadixLimits;

/// One FFT-friendly axis length and its cost metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polynom {
    pub value: u64,
    pub exponent2: u32,
    pub exponent3: u32,
    pub exponent5: u32,
    pub exponent7: u32,
    /// Estimated kernel launches to realize `value`.
    pub invocations: u32,
    /// Distinct primes with a non-zero exponent.
    pub prime_count: u32,
}

impl Polynom {
    /// Stand-in for an axis that produced no candidates.
    pub const UNIT: Self = Self {
        value: 1,
        exponent2: 0,
        exponent3: 0,
        exponent5: 0,
        exponent7: 0,
        invocations: 0,
        prime_count: 0,
    };

    fn from_exponents(value: u64, exponents: [u32; 4], limits: &RadixLimits) -> Self {
        let [e2, e3, e5, e7] = exponents;
        Self {
            value,
            exponent2: e2,
            exponent3: e3,
            exponent5: e5,
            exponent7: e7,
            invocations: limits.invocations(e2, e3, e5, e7),
            prime_count: exponents.iter().filter(|&&e| e != 0).count() as u32,
        }
    }
}

/// Smallest `e` with `base^e >= bound`.
fn ceil_log(base: u64, bound: u64) -> u32 {
    let mut exponent = 0;
    let mut power = 1u64;
    while power < bound {
        power = power.saturating_mul(base);
        exponent += 1;
    }
    exponent
}

/// Every even candidate near `num`, in enumeration order.
///
/// Padding keeps `num <= value <= next_power_of_two(num)`; cropping keeps
/// `value <= num`. Exponent ranges are bounded by the power-of-two ceiling of
/// `num`, so `num == 1` yields nothing.
#[must_use]
pub fn generate_candidates(num: usize, limits: &RadixLimits, crop: bool) -> Vec<Polynom> {
    let num = num as u64;
    let max = num.max(1).next_power_of_two();
    let max_pow2 = max.trailing_zeros();
    let max_pow3 = ceil_log(3, max);
    let max_pow5 = ceil_log(5, max);
    let max_pow7 = ceil_log(7, max);
    let upper = if crop { num } else { max };

    let mut result = Vec::new();
    let mut p2 = 1u64;
    for a in 1..=max_pow2 {
        p2 = p2.saturating_mul(2);
        if p2 > upper {
            break;
        }
        let mut p3 = p2;
        for b in 0..=max_pow3 {
            if b > 0 {
                p3 = p3.saturating_mul(3);
            }
            if p3 > upper {
                break;
            }
            let mut p5 = p3;
            for c in 0..=max_pow5 {
                if c > 0 {
                    p5 = p5.saturating_mul(5);
                }
                if p5 > upper {
                    break;
                }
                let mut value = p5;
                for d in 0..=max_pow7 {
                    if d > 0 {
                        value = value.saturating_mul(7);
                    }
                    if value > upper {
                        break;
                    }
                    if crop || value >= num {
                        result.push(Polynom::from_exponents(value, [a, b, c, d], limits));
                    }
                }
            }
        }
    }
    result
}

/// Reduce `candidates` to the few worth composing.
///
/// Keeps the smallest value plus everything within two launches of the
/// cheapest candidate that uses at most four primes. The result is ascending
/// by value with one entry per value. An empty input yields [`Polynom::UNIT`].
#[must_use]
pub fn filter_good_set(candidates: &[Polynom]) -> Vec<Polynom> {
    let (Some(min_invocations), Some(smallest)) = (
        candidates.iter().map(|p| p.invocations).min(),
        candidates.iter().min_by_key(|p| p.value),
    ) else {
        return vec![Polynom::UNIT];
    };

    let mut good = BTreeMap::new();
    good.insert(smallest.value, *smallest);
    for candidate in candidates {
        if candidate.invocations <= min_invocations + 2 && candidate.prime_count <= 4 {
            good.entry(candidate.value).or_insert(*candidate);
        }
    }
    good.into_values().collect()
}
