//! Memory gate and batch-count search.

use fadv_transform::{FootprintEstimator, GeneralTransform, Transform, VariantGenerator};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Whole megabytes needed for `bytes`, rounded up.
#[must_use]
pub const fn to_mb_ceil(bytes: u64) -> u64 {
    bytes.div_ceil(BYTES_PER_MB)
}

/// Admits concrete variants whose data plus working memory fits a budget.
pub struct MemoryGate<'a> {
    generator: &'a dyn VariantGenerator,
    estimator: &'a dyn FootprintEstimator,
    max_mem_mb: u64,
}

impl<'a> MemoryGate<'a> {
    #[must_use]
    pub fn new(
        generator: &'a dyn VariantGenerator,
        estimator: &'a dyn FootprintEstimator,
        max_mem_mb: u64,
    ) -> Self {
        Self {
            generator,
            estimator,
            max_mem_mb,
        }
    }

    /// Data size plus the larger working-memory estimate, in whole MB.
    #[must_use]
    pub fn footprint_mb(&self, transform: &Transform) -> u64 {
        let plan = self.estimator.estimate(transform).worst_case_b();
        to_mb_ceil(transform.data_size_b.saturating_add(plan))
    }

    #[must_use]
    pub fn admits(&self, transform: &Transform) -> bool {
        self.footprint_mb(transform) <= self.max_mem_mb
    }

    /// Push every variant of `request` at `n` images that fits the budget.
    /// Returns whether any did.
    pub fn collapse(
        &self,
        request: &GeneralTransform,
        is_batched: bool,
        n: usize,
        result: &mut Vec<Transform>,
    ) -> bool {
        let before = result.len();
        result.extend(
            self.generator
                .generate(request, n, is_batched)
                .into_iter()
                .filter(|t| self.admits(t)),
        );
        result.len() > before
    }

    /// Find the largest batch up to `request.n` that fits.
    ///
    /// Doubles from one image while the batch fits, then walks down from just
    /// below the first failing count until a fitting count turns up or the
    /// last fitting power of two is reached. Every fitting count tested is
    /// kept.
    pub fn collapse_batched(&self, request: &GeneralTransform, result: &mut Vec<Transform>) {
        let mut last_n = 1usize;
        let mut probe = Some(1usize);
        while let Some(current_n) = probe.filter(|&n| n <= request.n) {
            if !self.collapse(request, true, current_n, result) {
                break;
            }
            last_n = current_n;
            probe = current_n.checked_mul(2);
        }

        // `None` means doubling overflowed past every representable count.
        let mut current_n = probe.map_or(request.n, |n| request.n.min(n - 1));
        let mut searching = true;
        while searching && current_n > last_n {
            searching = !self.collapse(request, true, current_n, result);
            current_n -= 1;
        }
    }
}
