use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};
use crate::radix::AcceleratorVersion;

/// Knobs of one optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeOptions {
    /// Cap on shapes composed per input and on variants returned.
    pub n_best: usize,
    /// Allowed growth (pad) or shrink (crop) of the element count, in percent.
    pub max_perc_increase: u32,
    pub max_mem_mb: u64,
    /// Require all active axes to be equal.
    pub square_only: bool,
    /// Shrink toward friendly sizes instead of growing.
    pub crop: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            n_best: 5,
            max_perc_increase: 10,
            max_mem_mb: 4096,
            square_only: false,
            crop: false,
        }
    }
}

impl OptimizeOptions {
    #[must_use]
    pub fn with_n_best(mut self, n_best: usize) -> Self {
        self.n_best = n_best;
        self
    }

    #[must_use]
    pub fn with_max_perc_increase(mut self, max_perc_increase: u32) -> Self {
        self.max_perc_increase = max_perc_increase;
        self
    }

    #[must_use]
    pub fn with_max_mem_mb(mut self, max_mem_mb: u64) -> Self {
        self.max_mem_mb = max_mem_mb;
        self
    }

    #[must_use]
    pub fn with_square_only(mut self, square_only: bool) -> Self {
        self.square_only = square_only;
        self
    }

    #[must_use]
    pub fn with_crop(mut self, crop: bool) -> Self {
        self.crop = crop;
        self
    }

    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> AdvisorResult<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|err| AdvisorError::InvalidOptions {
                detail: err.to_string(),
            })?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> AdvisorResult<()> {
        if self.n_best == 0 {
            return Err(AdvisorError::InvalidOptions {
                detail: "n_best must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// How a [`SizeOptimizer`](crate::SizeOptimizer) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub version: AcceleratorVersion,
    /// Also search axis-order permutations of the request.
    pub allow_transpose: bool,
}
