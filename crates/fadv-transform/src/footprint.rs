#![forbid(unsafe_code)]

//! Working-memory estimates for concrete transform variants.

use serde::{Deserialize, Serialize};

use crate::request::Rank;
use crate::variant::Transform;

/// Fixed per-plan bookkeeping added to the twiddle-table estimate.
pub const PLAN_OVERHEAD_BYTES: u64 = 64 * 1024;

/// Two independent working-memory estimates for one variant, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FootprintEstimate {
    pub plan_size_b: u64,
    pub plan_size_alt_b: u64,
}

impl FootprintEstimate {
    /// The figure the memory gate trusts.
    #[must_use]
    pub fn worst_case_b(&self) -> u64 {
        self.plan_size_b.max(self.plan_size_alt_b)
    }
}

/// Estimates how much working memory a plan for a variant would allocate.
pub trait FootprintEstimator {
    fn estimate(&self, transform: &Transform) -> FootprintEstimate;
}

/// Closed-form estimator; never touches a device.
///
/// The primary figure is one complex scratch buffer for the whole batch,
/// needed unless the transform is a single power-of-two axis. The alternate
/// figure is the twiddle tables plus [`PLAN_OVERHEAD_BYTES`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticFootprint;

impl FootprintEstimator for AnalyticFootprint {
    fn estimate(&self, transform: &Transform) -> FootprintEstimate {
        let complex_b = transform.complex_elem_size_b();
        let yz = transform.y as u64 * transform.z as u64;
        let complex_elems = if transform.is_real {
            (transform.x as u64 / 2 + 1) * yz
        } else {
            transform.dim_size()
        };

        let single_radix_2 =
            transform.rank() == Rank::OneD && transform.dim_size().is_power_of_two();
        let plan_size_b = if single_radix_2 {
            0
        } else {
            (complex_elems * complex_b).saturating_mul(transform.batch() as u64)
        };

        let axes = (transform.x + transform.y + transform.z) as u64;
        let plan_size_alt_b = axes * complex_b + PLAN_OVERHEAD_BYTES;

        FootprintEstimate {
            plan_size_b,
            plan_size_alt_b,
        }
    }
}
