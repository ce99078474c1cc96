//! # themis-methods
//!
//! Bias adjustment methods over 1-D time series.
//!
//! Every method calibrates on the historical overlap (`obs`, `simh`) and
//! corrects the simulated projection (`simp`):
//!
//! - **Scaling family** — closed-form moment corrections:
//!   [`linear_scaling`], [`variance_scaling`], [`delta_method`].
//! - **Distribution family** — empirical-CDF driven corrections:
//!   [`quantile_mapping`], [`detrended_quantile_mapping`],
//!   [`quantile_delta_mapping`].
//!
//! Each function works on one calibration unit: a single grouping-key
//! partition of a single grid cell. Partitioning by grouping key and grid
//! dimension, and the method-name registry, live in `themis-adjust`.
//!
//! [`Kind`] selects whether corrections are expressed as differences
//! (additive) or ratios (multiplicative); multiplicative divisions are
//! guarded by [`safe_ratio`] so numeric degeneracies never surface as
//! infinities.

mod distribution;
mod error;
mod kind;
mod ratio;
mod scaling;

pub use distribution::{detrended_quantile_mapping, quantile_delta_mapping, quantile_mapping};
pub use error::MethodError;
pub use kind::Kind;
pub use ratio::{DEFAULT_MAX_SCALING_FACTOR, safe_ratio};
pub use scaling::{delta_method, linear_scaling, variance_scaling};

/// Validates the three input series of an adjustment method.
///
/// All series must be non-empty and the two historical series must have
/// equal length. `simp` may have any non-zero length.
pub(crate) fn validate_series(
    obs: &[f64],
    simh: &[f64],
    simp: &[f64],
) -> Result<(), MethodError> {
    for (name, series) in [("obs", obs), ("simh", simh), ("simp", simp)] {
        if series.is_empty() {
            return Err(MethodError::EmptyInput {
                name: name.to_string(),
            });
        }
    }
    if obs.len() != simh.len() {
        return Err(MethodError::LengthMismatch {
            obs_len: obs.len(),
            simh_len: simh.len(),
        });
    }
    Ok(())
}
