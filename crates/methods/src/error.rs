//! Error types for the themis-methods crate.

use crate::kind::Kind;

/// Error type for all fallible operations in the themis-methods crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MethodError {
    /// Returned when a method is recognised but intentionally not
    /// implemented.
    #[error("method '{method}' is not implemented")]
    NotImplemented {
        /// Name of the unimplemented method.
        method: String,
    },

    /// Returned when a method does not support the requested adjustment
    /// kind.
    #[error("kind '{kind}' is not available for method '{method}'")]
    UnsupportedKind {
        /// Name of the method.
        method: String,
        /// The unsupported adjustment kind.
        kind: Kind,
    },

    /// Returned when an adjustment-kind string is neither additive nor
    /// multiplicative.
    #[error("unknown adjustment kind '{value}' (expected 'additive'/'+' or 'multiplicative'/'*')")]
    UnknownKind {
        /// The unrecognised kind spelling.
        value: String,
    },

    /// Returned when an input series is empty.
    #[error("input series '{name}' is empty")]
    EmptyInput {
        /// Name of the offending series.
        name: String,
    },

    /// Returned when the observed and simulated historical series differ
    /// in length.
    #[error("historical length mismatch: obs has {obs_len} steps, simh has {simh_len}")]
    LengthMismatch {
        /// Length of the observed historical series.
        obs_len: usize,
        /// Length of the simulated historical series.
        simh_len: usize,
    },

    /// Returned when empirical distribution estimation fails.
    #[error(transparent)]
    Ecdf(#[from] themis_ecdf::EcdfError),
}
