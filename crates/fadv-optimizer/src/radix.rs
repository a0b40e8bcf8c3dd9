//! Per-version radix limits used to estimate kernel invocations.
//!
//! Each limit is the largest exponent of a prime that a single kernel launch
//! can absorb. Covering a candidate's exponent greedily with the largest
//! radix not exceeding the remainder gives the launch count for that prime.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};

/// Accelerator API generation the radix tables describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AcceleratorVersion {
    #[default]
    V8,
    /// Known but without published radix limits.
    V9,
}

impl Display for AcceleratorVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V8 => write!(f, "8"),
            Self::V9 => write!(f, "9"),
        }
    }
}

/// Largest single-launch exponent for each prime base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixLimits {
    pub radix_2: u32,
    pub radix_3: u32,
    pub radix_5: u32,
    pub radix_7: u32,
}

impl RadixLimits {
    /// Estimated kernel launches for `2^e2 * 3^e3 * 5^e5 * 7^e7`.
    #[must_use]
    pub fn invocations(&self, e2: u32, e3: u32, e5: u32, e7: u32) -> u32 {
        covering_invocations(self.radix_2, e2)
            + covering_invocations(self.radix_3, e3)
            + covering_invocations(self.radix_5, e5)
            + covering_invocations(self.radix_7, e7)
    }
}

/// Launches needed to cover `exponent` when every radix `1..=max_power` is
/// available. Greedy covering takes `max_power` until the remainder is
/// smaller, then one more launch.
#[must_use]
pub fn covering_invocations(max_power: u32, exponent: u32) -> u32 {
    debug_assert!(max_power > 0, "radix limit must be positive");
    exponent.div_ceil(max_power.max(1))
}

/// Single- and double-precision limits of one API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixTable {
    pub version: AcceleratorVersion,
    pub single: RadixLimits,
    pub double: RadixLimits,
}

static V8_RADIX_TABLE: RadixTable = RadixTable {
    version: AcceleratorVersion::V8,
    single: RadixLimits {
        radix_2: 10,
        radix_3: 6,
        radix_5: 3,
        radix_7: 3,
    },
    double: RadixLimits {
        radix_2: 9,
        radix_3: 5,
        radix_5: 3,
        radix_7: 3,
    },
};

impl RadixTable {
    pub fn for_version(version: AcceleratorVersion) -> AdvisorResult<&'static Self> {
        match version {
            AcceleratorVersion::V8 => Ok(&V8_RADIX_TABLE),
            AcceleratorVersion::V9 => Err(AdvisorError::UnsupportedVersion { version }),
        }
    }

    #[must_use]
    pub const fn limits(&self, is_float: bool) -> &RadixLimits {
        if is_float { &self.single } else { &self.double }
    }
}

#[cfg(test)]
mod tests {
    use super::{AcceleratorVersion, RadixTable, covering_invocations};
    use crate::AdvisorError;

    #[test]
    fn greedy_cover_counts_launches() {
        assert_eq!(covering_invocations(10, 0), 0);
        assert_eq!(covering_invocations(10, 7), 1);
        assert_eq!(covering_invocations(10, 10), 1);
        assert_eq!(covering_invocations(10, 11), 2);
        assert_eq!(covering_invocations(3, 7), 3);
    }

    #[test]
    fn double_precision_needs_more_launches() {
        let table = RadixTable::for_version(AcceleratorVersion::V8).expect("v8 is supported");
        // 2^10 * 3^6
        assert_eq!(table.limits(true).invocations(10, 6, 0, 0), 2);
        assert_eq!(table.limits(false).invocations(10, 6, 0, 0), 4);
    }

    #[test]
    fn unsupported_version_fails_fast() {
        let err = RadixTable::for_version(AcceleratorVersion::V9).expect_err("v9 has no table");
        assert_eq!(
            err,
            AdvisorError::UnsupportedVersion {
                version: AcceleratorVersion::V9
            }
        );
    }
}
