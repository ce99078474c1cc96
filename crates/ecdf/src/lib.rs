//! # themis-ecdf
//!
//! Histogram-based empirical distribution estimation.
//!
//! A quantile mapping compares two samples at equal cumulative density, so
//! both sides are estimated over one shared set of bin edges:
//!
//! 1. [`union_range`] finds the value range covered by the participating
//!    series;
//! 2. [`BinEdges::linspace`] lays equal-width bins over that range;
//! 3. [`EmpiricalCdf::from_sample`] counts each sample into those bins and
//!    exposes forward ([`EmpiricalCdf::percentile_of`]) and inverse
//!    ([`EmpiricalCdf::value_at_percentile`]) lookups via piecewise-linear
//!    interpolation.
//!
//! Values outside the estimated range clip to the nearest endpoint, and a
//! constant sample degenerates to a point mass rather than dividing by a
//! zero bin width.
//!
//! Distributions are rebuilt from scratch per call; nothing is cached or
//! persisted.

mod cdf;
mod edges;
mod error;

pub use cdf::EmpiricalCdf;
pub use edges::{BinEdges, union_range};
pub use error::EcdfError;
