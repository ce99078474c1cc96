//! Distribution-family adjustments driven by empirical CDFs.

use themis_ecdf::{BinEdges, EmpiricalCdf, union_range};
use themis_stats::mean;

use crate::error::MethodError;
use crate::kind::Kind;
use crate::ratio::safe_ratio;
use crate::validate_series;

/// Shared equal-width edges spanning the given series.
///
/// Additive edges span the union range directly. Multiplicative edges pin
/// the origin at zero so ratio variables keep meaningful bins near zero.
fn spanning_edges(
    kind: Kind,
    series: &[&[f64]],
    n_quantiles: usize,
) -> Result<BinEdges, MethodError> {
    let (lo, hi) = union_range(series)?;
    let edges = match kind {
        Kind::Additive => BinEdges::linspace(lo, hi, n_quantiles)?,
        Kind::Multiplicative => BinEdges::linspace(0.0, hi.max(0.0), n_quantiles)?,
    };
    Ok(edges)
}

/// Quantile mapping: substitutes each projected value by the observed
/// value of equal rank.
///
/// Both historical distributions are estimated over shared edges spanning
/// the union of `obs` and `simh`; each value of `simp` is ranked in the
/// simulated historical distribution (`F_simh`) and replaced by the
/// observed value at that rank (`F_obs⁻¹`). Projected values beyond the
/// historical range clip to the nearest endpoint.
///
/// # Errors
///
/// Returns [`MethodError`] on empty inputs, historical length mismatch, or
/// a zero `n_quantiles`.
pub fn quantile_mapping(
    obs: &[f64],
    simh: &[f64],
    simp: &[f64],
    kind: Kind,
    n_quantiles: usize,
) -> Result<Vec<f64>, MethodError> {
    validate_series(obs, simh, simp)?;
    let edges = spanning_edges(kind, &[obs, simh], n_quantiles)?;
    let f_obs = EmpiricalCdf::from_sample(obs, &edges)?;
    let f_simh = EmpiricalCdf::from_sample(simh, &edges)?;

    Ok(simp
        .iter()
        .map(|&v| f_obs.value_at_percentile(f_simh.percentile_of(v)))
        .collect())
}

/// Detrended quantile mapping over a single group.
///
/// Shifts the group's projection onto the simulated historical level by
/// replacing its mean (subtract `mean(simp) - mean(simh)` for additive,
/// guarded-multiply by `mean(simh) / mean(simp)` for multiplicative),
/// applies the quantile-mapping substitution against the group's
/// historical distributions, then restores the projected mean. The
/// projected change in the group mean therefore survives the substitution
/// instead of being clipped away at the historical range.
///
/// Callers are expected to have partitioned all three series by a
/// grouping key; the dispatcher enforces that a key was supplied.
///
/// # Errors
///
/// Returns [`MethodError`] on empty inputs, historical length mismatch, or
/// a zero `n_quantiles`.
pub fn detrended_quantile_mapping(
    obs: &[f64],
    simh: &[f64],
    simp: &[f64],
    kind: Kind,
    n_quantiles: usize,
    max_scaling_factor: f64,
) -> Result<Vec<f64>, MethodError> {
    validate_series(obs, simh, simp)?;
    let m_simh = mean(simh);
    let m_simp = mean(simp);

    let detrended: Vec<f64> = match kind {
        Kind::Additive => simp.iter().map(|&v| v - m_simp + m_simh).collect(),
        Kind::Multiplicative => {
            let down = safe_ratio(m_simh, m_simp, max_scaling_factor);
            simp.iter().map(|&v| v * down).collect()
        }
    };

    let mapped = quantile_mapping(obs, simh, &detrended, kind, n_quantiles)?;

    Ok(match kind {
        Kind::Additive => mapped.iter().map(|&v| v + m_simp - m_simh).collect(),
        Kind::Multiplicative => {
            let up = safe_ratio(m_simp, m_simh, max_scaling_factor);
            mapped.iter().map(|&v| v * up).collect()
        }
    })
}

/// Quantile delta mapping: corrects each projected value by the
/// historical bias observed at that value's own rank.
///
/// Each value of `simp` is ranked within the projection's own
/// distribution (`F_simp`), the observed and simulated historical values
/// at that rank are compared, and the difference (additive) or guarded
/// ratio (multiplicative) is applied to the value itself. Unlike plain
/// quantile mapping this preserves each value's rank in the projected
/// distribution.
///
/// All three distributions are estimated over shared edges spanning the
/// union of the three series, so the self-referential ranking covers the
/// full projected range.
///
/// # Errors
///
/// Returns [`MethodError`] on empty inputs, historical length mismatch, or
/// a zero `n_quantiles`.
pub fn quantile_delta_mapping(
    obs: &[f64],
    simh: &[f64],
    simp: &[f64],
    kind: Kind,
    n_quantiles: usize,
    max_scaling_factor: f64,
) -> Result<Vec<f64>, MethodError> {
    validate_series(obs, simh, simp)?;
    let edges = spanning_edges(kind, &[obs, simh, simp], n_quantiles)?;
    let f_obs = EmpiricalCdf::from_sample(obs, &edges)?;
    let f_simh = EmpiricalCdf::from_sample(simh, &edges)?;
    let f_simp = EmpiricalCdf::from_sample(simp, &edges)?;

    Ok(simp
        .iter()
        .map(|&v| {
            let p = f_simp.percentile_of(v);
            let obs_q = f_obs.value_at_percentile(p);
            let simh_q = f_simh.value_at_percentile(p);
            match kind {
                Kind::Additive => v + (obs_q - simh_q),
                Kind::Multiplicative => v * safe_ratio(obs_q, simh_q, max_scaling_factor),
            }
        })
        .collect())
}
