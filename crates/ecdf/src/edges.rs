//! Shared bin edges for empirical CDF estimation.

use crate::error::EcdfError;

/// Equal-width bin edges spanning a closed value range.
///
/// Every CDF participating in one quantile mapping is built over the same
/// edges, so forward and inverse lookups are directly comparable between
/// distributions. For `n_quantiles` bins there are `n_quantiles + 1` edges.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEdges {
    edges: Vec<f64>,
}

impl BinEdges {
    /// Builds `n_quantiles + 1` evenly spaced edges over `[lo, hi]`.
    ///
    /// A zero-width range (`lo == hi`) is allowed and produces degenerate
    /// edges describing a point mass at `lo`.
    ///
    /// # Errors
    ///
    /// Returns [`EcdfError::InvalidQuantileCount`] if `n_quantiles` is zero
    /// and [`EcdfError::InvalidRange`] if either endpoint is non-finite or
    /// `hi < lo`.
    pub fn linspace(lo: f64, hi: f64, n_quantiles: usize) -> Result<Self, EcdfError> {
        if n_quantiles == 0 {
            return Err(EcdfError::InvalidQuantileCount { n_quantiles });
        }
        if !lo.is_finite() || !hi.is_finite() || hi < lo {
            return Err(EcdfError::InvalidRange { lo, hi });
        }

        let step = (hi - lo) / n_quantiles as f64;
        let mut edges: Vec<f64> = (0..=n_quantiles).map(|i| lo + step * i as f64).collect();
        // Pin the last edge so the range is closed exactly at hi.
        edges[n_quantiles] = hi;

        Ok(Self { edges })
    }

    /// Returns the edges as a slice, ascending.
    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// Returns the lower endpoint of the range.
    pub fn lo(&self) -> f64 {
        self.edges[0]
    }

    /// Returns the upper endpoint of the range.
    pub fn hi(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Returns the number of bins (one less than the number of edges).
    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// True when the range has zero width (point mass at `lo`).
    pub fn is_degenerate(&self) -> bool {
        self.hi() == self.lo()
    }
}

/// Minimum and maximum over the finite values of several series.
///
/// # Errors
///
/// Returns [`EcdfError::EmptySample`] if no finite value exists across
/// all series.
pub fn union_range(series: &[&[f64]]) -> Result<(f64, f64), EcdfError> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in series {
        for &v in *s {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    if lo > hi {
        return Err(EcdfError::EmptySample);
    }
    Ok((lo, hi))
}
