#![forbid(unsafe_code)]

//! FFT size advisor.
//!
//! Given a requested transform shape, searches nearby sizes factorable into
//! 2, 3, 5 and 7, keeps the concrete variants that fit a memory budget and
//! ranks them by expected efficiency.
//!
//! ## Module layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | `radix`     | [`AcceleratorVersion`], per-version [`RadixTable`]     |
//! | `polynom`   | [`Polynom`] candidates, generation and filtering       |
//! | `compose`   | [`SizeBounds`], 3-D and 1-D/2-D shape composition      |
//! | `batch`     | [`MemoryGate`] and batch-count search                  |
//! | `rank`      | preference order and truncation                        |
//! | `options`   | [`OptimizeOptions`], [`AdvisorConfig`]                 |
//! | `optimizer` | [`SizeOptimizer`], [`SearchTrace`] logging             |

pub mod batch;
pub mod compose;
pub mod error;
pub mod optimizer;
pub mod options;
pub mod polynom;
pub mod radix;
pub mod rank;

pub use batch::{MemoryGate, to_mb_ceil};
pub use compose::{SizeBounds, optimize_xyz_1d_2d, optimize_xyz_3d};
pub use error::{AdvisorError, AdvisorResult};
pub use optimizer::{SearchTrace, SizeOptimizer, take_search_traces};
pub use options::{AdvisorConfig, OptimizeOptions};
pub use polynom::{Polynom, filter_good_set, generate_candidates};
pub use radix::{AcceleratorVersion, RadixLimits, RadixTable, covering_invocations};
pub use rank::{perf_order, rank_variants, size_order};
