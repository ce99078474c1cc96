//! Configuration for the adjustment dispatcher.

use themis_methods::{DEFAULT_MAX_SCALING_FACTOR, Kind};

use crate::error::AdjustError;

/// Configuration for [`adjust`](crate::adjust).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use themis_adjust::AdjustConfig;
/// use themis_methods::Kind;
///
/// let config = AdjustConfig::new(Kind::Additive)
///     .with_n_quantiles(250)
///     .with_n_jobs(4);
/// ```
#[derive(Clone, Debug)]
pub struct AdjustConfig {
    kind: Kind,
    n_quantiles: usize,
    n_jobs: usize,
    max_scaling_factor: f64,
}

impl AdjustConfig {
    /// Creates a new configuration for the given adjustment kind.
    ///
    /// Defaults: `n_quantiles = 100`, `n_jobs = 1`,
    /// `max_scaling_factor = 10.0`.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            n_quantiles: 100,
            n_jobs: 1,
            max_scaling_factor: DEFAULT_MAX_SCALING_FACTOR,
        }
    }

    // --- Builder methods ---

    /// Sets the number of histogram bins used by distribution methods.
    pub fn with_n_quantiles(mut self, n: usize) -> Self {
        self.n_quantiles = n;
        self
    }

    /// Sets the parallelism degree for grid dispatch.
    pub fn with_n_jobs(mut self, n: usize) -> Self {
        self.n_jobs = n;
        self
    }

    /// Sets the bound substituted when a multiplicative ratio cannot be
    /// formed.
    pub fn with_max_scaling_factor(mut self, f: f64) -> Self {
        self.max_scaling_factor = f;
        self
    }

    // --- Accessors ---

    /// Returns the adjustment kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the number of histogram bins used by distribution methods.
    pub fn n_quantiles(&self) -> usize {
        self.n_quantiles
    }

    /// Returns the parallelism degree for grid dispatch.
    pub fn n_jobs(&self) -> usize {
        self.n_jobs
    }

    /// Returns the guarded-ratio bound.
    pub fn max_scaling_factor(&self) -> f64 {
        self.max_scaling_factor
    }

    /// Validates this configuration.
    ///
    /// Checks that `n_quantiles` and `n_jobs` are at least 1 and that
    /// `max_scaling_factor` is finite and positive.
    pub fn validate(&self) -> Result<(), AdjustError> {
        if self.n_quantiles < 1 {
            return Err(AdjustError::InvalidConfig {
                reason: format!("n_quantiles must be >= 1, got {}", self.n_quantiles),
            });
        }
        if self.n_jobs < 1 {
            return Err(AdjustError::InvalidConfig {
                reason: format!("n_jobs must be >= 1, got {}", self.n_jobs),
            });
        }
        if !self.max_scaling_factor.is_finite() || self.max_scaling_factor <= 0.0 {
            return Err(AdjustError::InvalidConfig {
                reason: format!(
                    "max_scaling_factor must be finite and > 0, got {}",
                    self.max_scaling_factor
                ),
            });
        }
        Ok(())
    }
}
