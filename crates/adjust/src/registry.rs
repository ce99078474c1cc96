//! Method-name registry.

use themis_methods::{
    MethodError, delta_method, detrended_quantile_mapping, linear_scaling,
    quantile_delta_mapping, quantile_mapping, variance_scaling,
};

use crate::config::AdjustConfig;
use crate::error::AdjustError;

/// A registered bias adjustment method.
///
/// Resolution from a name is a pure lookup; every variant dispatches to
/// its implementation through [`Method::apply_series`] with a uniform
/// signature. `empirical_quantile_mapping` is recognised but
/// intentionally unimplemented, which is a different failure from an
/// unknown name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Mean correction by a single shift or factor.
    LinearScaling,
    /// Mean correction plus residual-spread matching (additive only).
    VarianceScaling,
    /// Projected mean change applied to the observed timeline.
    DeltaMethod,
    /// Rank substitution between historical distributions.
    QuantileMapping,
    /// Rank substitution with group-mean trend preservation.
    DetrendedQuantileMapping,
    /// Rank-preserving correction by quantile-matched historical bias.
    QuantileDeltaMapping,
    /// Recognised name, deliberately not implemented.
    EmpiricalQuantileMapping,
}

/// All registered methods, in registry order.
pub const ALL_METHODS: [Method; 7] = [
    Method::LinearScaling,
    Method::VarianceScaling,
    Method::DeltaMethod,
    Method::QuantileMapping,
    Method::DetrendedQuantileMapping,
    Method::QuantileDeltaMapping,
    Method::EmpiricalQuantileMapping,
];

impl Method {
    /// Resolves a method name.
    ///
    /// # Errors
    ///
    /// Returns [`AdjustError::UnknownMethod`] for unregistered names.
    pub fn from_name(name: &str) -> Result<Self, AdjustError> {
        match name {
            "linear_scaling" => Ok(Method::LinearScaling),
            "variance_scaling" => Ok(Method::VarianceScaling),
            "delta_method" => Ok(Method::DeltaMethod),
            "quantile_mapping" => Ok(Method::QuantileMapping),
            "detrended_quantile_mapping" => Ok(Method::DetrendedQuantileMapping),
            "quantile_delta_mapping" => Ok(Method::QuantileDeltaMapping),
            "empirical_quantile_mapping" => Ok(Method::EmpiricalQuantileMapping),
            other => Err(AdjustError::UnknownMethod {
                method: other.to_string(),
            }),
        }
    }

    /// Returns the registered name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::LinearScaling => "linear_scaling",
            Method::VarianceScaling => "variance_scaling",
            Method::DeltaMethod => "delta_method",
            Method::QuantileMapping => "quantile_mapping",
            Method::DetrendedQuantileMapping => "detrended_quantile_mapping",
            Method::QuantileDeltaMapping => "quantile_delta_mapping",
            Method::EmpiricalQuantileMapping => "empirical_quantile_mapping",
        }
    }

    /// True for the scaling family (moment-based corrections).
    pub fn is_scaling(&self) -> bool {
        matches!(
            self,
            Method::LinearScaling | Method::VarianceScaling | Method::DeltaMethod
        )
    }

    /// True for the distribution family (empirical-CDF corrections).
    pub fn is_distribution(&self) -> bool {
        !self.is_scaling()
    }

    /// True when the method only calibrates within a grouping key.
    pub fn requires_group(&self) -> bool {
        matches!(self, Method::DetrendedQuantileMapping)
    }

    /// True when the output timeline matches `obs` instead of `simp`.
    pub fn output_matches_obs(&self) -> bool {
        matches!(self, Method::DeltaMethod)
    }

    /// Applies the method to one calibration unit of 1-D series.
    ///
    /// # Errors
    ///
    /// Returns [`MethodError`] for unsupported kinds, invalid inputs, or
    /// the intentionally unimplemented method.
    pub fn apply_series(
        &self,
        obs: &[f64],
        simh: &[f64],
        simp: &[f64],
        config: &AdjustConfig,
    ) -> Result<Vec<f64>, MethodError> {
        let kind = config.kind();
        match self {
            Method::LinearScaling => {
                linear_scaling(obs, simh, simp, kind, config.max_scaling_factor())
            }
            Method::VarianceScaling => variance_scaling(obs, simh, simp, kind),
            Method::DeltaMethod => {
                delta_method(obs, simh, simp, kind, config.max_scaling_factor())
            }
            Method::QuantileMapping => {
                quantile_mapping(obs, simh, simp, kind, config.n_quantiles())
            }
            Method::DetrendedQuantileMapping => detrended_quantile_mapping(
                obs,
                simh,
                simp,
                kind,
                config.n_quantiles(),
                config.max_scaling_factor(),
            ),
            Method::QuantileDeltaMapping => quantile_delta_mapping(
                obs,
                simh,
                simp,
                kind,
                config.n_quantiles(),
                config.max_scaling_factor(),
            ),
            Method::EmpiricalQuantileMapping => Err(MethodError::NotImplemented {
                method: self.name().to_string(),
            }),
        }
    }
}
