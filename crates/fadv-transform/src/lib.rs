#![forbid(unsafe_code)]

//! Transform descriptions consumed by the FFT size advisor.
//!
//! A [`GeneralTransform`] is what the caller asks for: a shape plus
//! [`Tristate`] properties that may be left open. A [`Transform`] is one fully
//! resolved variant of it with its raw buffer size. The [`VariantGenerator`]
//! and [`FootprintEstimator`] traits are the seams the optimizer plugs into.

pub mod footprint;
pub mod generator;
pub mod request;
pub mod tristate;
pub mod variant;

pub use footprint::{
    AnalyticFootprint, FootprintEstimate, FootprintEstimator, PLAN_OVERHEAD_BYTES,
};
pub use generator::{StandardVariantGenerator, VariantGenerator, transpositions};
pub use request::{GeneralTransform, Rank};
pub use tristate::Tristate;
pub use variant::Transform;
