//! Scaling-family adjustments: closed-form corrections of first and
//! second moments.

use themis_stats::{mean, sd};

use crate::error::MethodError;
use crate::kind::Kind;
use crate::ratio::safe_ratio;
use crate::validate_series;

/// Linear scaling: shifts (additive) or rescales (multiplicative) the
/// projection by the mean bias between observed and simulated historical
/// data.
///
/// Additive output is `simp + (mean(obs) - mean(simh))`; multiplicative
/// output is `simp * mean(obs) / mean(simh)` with the ratio guarded by
/// `max_scaling_factor`.
///
/// # Errors
///
/// Returns [`MethodError`] on empty inputs or historical length mismatch.
pub fn linear_scaling(
    obs: &[f64],
    simh: &[f64],
    simp: &[f64],
    kind: Kind,
    max_scaling_factor: f64,
) -> Result<Vec<f64>, MethodError> {
    validate_series(obs, simh, simp)?;
    match kind {
        Kind::Additive => {
            let shift = mean(obs) - mean(simh);
            Ok(simp.iter().map(|&v| v + shift).collect())
        }
        Kind::Multiplicative => {
            let factor = safe_ratio(mean(obs), mean(simh), max_scaling_factor);
            Ok(simp.iter().map(|&v| v * factor).collect())
        }
    }
}

/// Variance scaling: mean-corrects the projection as linear scaling does,
/// then rescales the residuals so the corrected series matches the
/// observed historical standard deviation.
///
/// Only defined for [`Kind::Additive`]; variance ratios are not meaningful
/// multiplicatively in this design. A zero residual spread leaves the
/// residuals unscaled.
///
/// # Errors
///
/// Returns [`MethodError::UnsupportedKind`] for the multiplicative kind,
/// and the usual input-validation errors otherwise.
pub fn variance_scaling(
    obs: &[f64],
    simh: &[f64],
    simp: &[f64],
    kind: Kind,
) -> Result<Vec<f64>, MethodError> {
    if kind != Kind::Additive {
        return Err(MethodError::UnsupportedKind {
            method: "variance_scaling".to_string(),
            kind,
        });
    }
    validate_series(obs, simh, simp)?;

    let shift = mean(obs) - mean(simh);
    let corrected: Vec<f64> = simp.iter().map(|&v| v + shift).collect();

    let centre = mean(&corrected);
    let spread = sd(&corrected);
    let scale = if spread > 0.0 { sd(obs) / spread } else { 1.0 };

    Ok(corrected
        .iter()
        .map(|&v| (v - centre) * scale + centre)
        .collect())
}

/// Delta method: applies the simulated historical-to-future change signal
/// to the observed historical series.
///
/// Additive output is `obs + (mean(simp) - mean(simh))`; multiplicative
/// output is `obs * mean(simp) / mean(simh)` with the ratio guarded by
/// `max_scaling_factor`. The output therefore has `obs`'s length, not
/// `simp`'s: it is the observed timeline shifted by the projected change.
///
/// # Errors
///
/// Returns [`MethodError`] on empty inputs or historical length mismatch.
pub fn delta_method(
    obs: &[f64],
    simh: &[f64],
    simp: &[f64],
    kind: Kind,
    max_scaling_factor: f64,
) -> Result<Vec<f64>, MethodError> {
    validate_series(obs, simh, simp)?;
    match kind {
        Kind::Additive => {
            let delta = mean(simp) - mean(simh);
            Ok(obs.iter().map(|&v| v + delta).collect())
        }
        Kind::Multiplicative => {
            let factor = safe_ratio(mean(simp), mean(simh), max_scaling_factor);
            Ok(obs.iter().map(|&v| v * factor).collect())
        }
    }
}
