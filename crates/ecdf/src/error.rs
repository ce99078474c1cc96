//! Error types for the themis-ecdf crate.

/// Error type for all fallible operations in the themis-ecdf crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EcdfError {
    /// Returned when a sample contains no finite values.
    #[error("sample contains no finite values")]
    EmptySample,

    /// Returned when the requested bin count is zero.
    #[error("n_quantiles must be >= 1, got {n_quantiles}")]
    InvalidQuantileCount {
        /// The invalid bin count.
        n_quantiles: usize,
    },

    /// Returned when a bin range endpoint is NaN or infinite, or the
    /// upper endpoint is below the lower one.
    #[error("invalid bin range [{lo}, {hi}]")]
    InvalidRange {
        /// Lower endpoint of the range.
        lo: f64,
        /// Upper endpoint of the range.
        hi: f64,
    },
}
