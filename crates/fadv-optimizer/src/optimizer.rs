//! Top-level size search: expand, compose, gate, rank.

use std::time::Instant;

use fadv_runtime::{TraceSink, next_operation_id};
use fadv_transform::{
    AnalyticFootprint, FootprintEstimator, GeneralTransform, Rank, StandardVariantGenerator,
    Transform, Tristate, VariantGenerator, transpositions,
};
use serde::{Deserialize, Serialize};

use crate::batch::MemoryGate;
use crate::compose::{optimize_xyz_1d_2d, optimize_xyz_3d};
use crate::error::AdvisorResult;
use crate::options::{AdvisorConfig, OptimizeOptions};
use crate::radix::{AcceleratorVersion, RadixTable};
use crate::rank::rank_variants;

/// One structured log record per [`SizeOptimizer::optimize`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTrace {
    pub operation_id: String,
    pub version: AcceleratorVersion,
    pub inputs: usize,
    pub composed_shapes: usize,
    pub accepted_variants: usize,
    pub returned: usize,
    pub n_best: usize,
    pub max_perc_increase: u32,
    pub max_mem_mb: u64,
    pub square_only: bool,
    pub crop: bool,
    pub timing_ns: u64,
}

impl SearchTrace {
    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

static SEARCH_TRACES: TraceSink<SearchTrace> = TraceSink::new();

/// Drain the search traces recorded so far.
#[must_use]
pub fn take_search_traces() -> Vec<SearchTrace> {
    SEARCH_TRACES.take()
}

/// Advises FFT-friendly shapes for one request.
///
/// The optimizer keeps the normalized request (and its transpositions) plus
/// its collaborators; every [`optimize`](Self::optimize) call is independent.
pub struct SizeOptimizer {
    radix: &'static RadixTable,
    input: Vec<GeneralTransform>,
    generator: Box<dyn VariantGenerator>,
    estimator: Box<dyn FootprintEstimator>,
}

impl SizeOptimizer {
    /// Fails if `version` has no radix table. An undecided precision is
    /// settled to single: a caller unsure about double does not need it.
    pub fn new(
        version: AcceleratorVersion,
        mut request: GeneralTransform,
        allow_transpose: bool,
    ) -> AdvisorResult<Self> {
        let radix = RadixTable::for_version(version)?;
        if request.is_float == Tristate::Both {
            request.is_float = Tristate::True;
        }
        let input = if allow_transpose {
            transpositions(&request)
        } else {
            vec![request]
        };
        Ok(Self {
            radix,
            input,
            generator: Box::new(StandardVariantGenerator),
            estimator: Box::new(AnalyticFootprint),
        })
    }

    pub fn from_config(config: &AdvisorConfig, request: GeneralTransform) -> AdvisorResult<Self> {
        Self::new(config.version, request, config.allow_transpose)
    }

    #[must_use]
    pub fn with_generator(mut self, generator: impl VariantGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    #[must_use]
    pub fn with_estimator(mut self, estimator: impl FootprintEstimator + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    #[must_use]
    pub const fn version(&self) -> AcceleratorVersion {
        self.radix.version
    }

    /// Shapes searched by every run: the request, or its transpositions.
    #[must_use]
    pub fn inputs(&self) -> &[GeneralTransform] {
        &self.input
    }

    /// Ranked variants, at most `options.n_best`, that fit the memory budget.
    #[must_use]
    pub fn optimize(&self, options: &OptimizeOptions) -> Vec<Transform> {
        let started = Instant::now();
        let mut composed = Vec::new();
        for request in &self.input {
            let shapes = match request.rank() {
                Rank::ThreeD => self.optimize_xyz_3d(request, options),
                Rank::OneD | Rank::TwoD => self.optimize_xyz_1d_2d(request, options),
            };
            composed.extend(shapes);
        }

        let accepted = self.collect_feasible(&composed, options.max_mem_mb);
        let accepted_variants = accepted.len();
        let ranked = rank_variants(accepted, options.n_best);

        SEARCH_TRACES.record(SearchTrace {
            operation_id: next_operation_id("size-search"),
            version: self.radix.version,
            inputs: self.input.len(),
            composed_shapes: composed.len(),
            accepted_variants,
            returned: ranked.len(),
            n_best: options.n_best,
            max_perc_increase: options.max_perc_increase,
            max_mem_mb: options.max_mem_mb,
            square_only: options.square_only,
            crop: options.crop,
            timing_ns: started.elapsed().as_nanos() as u64,
        });
        ranked
    }

    #[must_use]
    pub fn optimize_xyz_3d(
        &self,
        request: &GeneralTransform,
        options: &OptimizeOptions,
    ) -> Vec<GeneralTransform> {
        optimize_xyz_3d(request, self.radix, options)
    }

    #[must_use]
    pub fn optimize_xyz_1d_2d(
        &self,
        request: &GeneralTransform,
        options: &OptimizeOptions,
    ) -> Vec<GeneralTransform> {
        optimize_xyz_1d_2d(request, self.radix, options)
    }

    /// Every concrete variant of `shapes` that fits `max_mem_mb`, unranked.
    ///
    /// A shape open on batching is tried both ways.
    #[must_use]
    pub fn collect_feasible(
        &self,
        shapes: &[GeneralTransform],
        max_mem_mb: u64,
    ) -> Vec<Transform> {
        let gate = MemoryGate::new(
            self.generator.as_ref(),
            self.estimator.as_ref(),
            max_mem_mb,
        );
        let mut result = Vec::new();
        for shape in shapes {
            if shape.is_batched.is_not() {
                gate.collapse(shape, false, shape.n, &mut result);
            }
            if shape.is_batched.is() {
                gate.collapse_batched(shape, &mut result);
            }
        }
        result
    }
}
