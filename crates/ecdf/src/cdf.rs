//! Empirical cumulative distribution over shared bin edges.

use crate::edges::BinEdges;
use crate::error::EcdfError;

/// Piecewise-linear interpolation of `x` against `(xs, ys)`.
///
/// `xs` must be non-decreasing. Values outside the `xs` range clamp to the
/// endpoint `ys` values; a plateau in `xs` resolves to the value at the
/// first index reaching it.
fn interp(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }
    // First index with xs[i] >= x; always in 1..=last here.
    let i = xs.partition_point(|&e| e < x);
    let (x0, x1) = (xs[i - 1], xs[i]);
    let (y0, y1) = (ys[i - 1], ys[i]);
    if x1 == x0 {
        return ys[i];
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Histogram-based empirical cumulative distribution of a 1-D sample.
///
/// Counts the sample into the bins described by a [`BinEdges`], prefixes a
/// zero, and normalises the cumulative sums to `[0, 1]`, giving one
/// cumulative-density value per edge. Forward and inverse lookups then
/// interpolate piecewise-linearly between edges; values outside the edge
/// range clip to the nearest endpoint.
///
/// A degenerate edge range (constant sample) is a point mass: the inverse
/// returns the constant and the forward mapping is a step function.
#[derive(Debug, Clone)]
pub struct EmpiricalCdf {
    edges: Vec<f64>,
    cdf: Vec<f64>,
    /// The point-mass value when the edge range has zero width.
    constant: Option<f64>,
}

impl EmpiricalCdf {
    /// Estimates the empirical CDF of `sample` over the given edges.
    ///
    /// Non-finite sample values are ignored; finite values outside the edge
    /// range count toward the nearest end bin, so the curve always reaches
    /// 1.0 at the last edge.
    ///
    /// # Errors
    ///
    /// Returns [`EcdfError::EmptySample`] if `sample` holds no finite value.
    pub fn from_sample(sample: &[f64], edges: &BinEdges) -> Result<Self, EcdfError> {
        if edges.is_degenerate() {
            if !sample.iter().any(|v| v.is_finite()) {
                return Err(EcdfError::EmptySample);
            }
            return Ok(Self {
                edges: edges.as_slice().to_vec(),
                cdf: Vec::new(),
                constant: Some(edges.lo()),
            });
        }

        let n_bins = edges.n_bins();
        let lo = edges.lo();
        let width = (edges.hi() - lo) / n_bins as f64;

        let mut counts = vec![0u64; n_bins];
        let mut total = 0u64;
        for &v in sample {
            if !v.is_finite() {
                continue;
            }
            let idx = (((v - lo) / width).floor() as isize).clamp(0, n_bins as isize - 1);
            counts[idx as usize] += 1;
            total += 1;
        }
        if total == 0 {
            return Err(EcdfError::EmptySample);
        }

        let mut cdf = Vec::with_capacity(n_bins + 1);
        cdf.push(0.0);
        let mut cumulative = 0u64;
        for &c in &counts {
            cumulative += c;
            cdf.push(cumulative as f64 / total as f64);
        }

        Ok(Self {
            edges: edges.as_slice().to_vec(),
            cdf,
            constant: None,
        })
    }

    /// Cumulative density of `value` (forward mapping).
    ///
    /// Values below the first edge return 0.0; values above the last edge
    /// return 1.0.
    pub fn percentile_of(&self, value: f64) -> f64 {
        if let Some(c) = self.constant {
            return if value < c { 0.0 } else { 1.0 };
        }
        interp(value, &self.edges, &self.cdf)
    }

    /// Value at cumulative density `p` (inverse mapping).
    ///
    /// `p` outside `[0, 1]` clips to the endpoint values.
    pub fn value_at_percentile(&self, p: f64) -> f64 {
        if let Some(c) = self.constant {
            return c;
        }
        interp(p, &self.cdf, &self.edges)
    }
}
