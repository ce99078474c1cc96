//! Error types for the themis-adjust crate.

use themis_methods::MethodError;

/// Error type for all fallible operations in the themis-adjust crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdjustError {
    /// Returned when a method name is not in the registry.
    #[error("unknown method '{method}'")]
    UnknownMethod {
        /// The unrecognised method name.
        method: String,
    },

    /// Returned when a method that calibrates per group is invoked
    /// without a grouping key.
    #[error("method '{method}' requires a grouping key")]
    GroupRequired {
        /// Name of the method.
        method: String,
    },

    /// Returned when a grid holds no values.
    #[error("input grid '{name}' is empty")]
    EmptyGrid {
        /// Name of the offending grid.
        name: String,
    },

    /// Returned when a value buffer does not match the declared shape.
    #[error("grid shape mismatch: {values_len} values for {n_time} time steps x {n_cells} cells")]
    GridShape {
        /// Length of the value buffer.
        values_len: usize,
        /// Declared number of time steps.
        n_time: usize,
        /// Declared number of grid cells.
        n_cells: usize,
    },

    /// Returned when the observed and simulated historical grids differ
    /// in time-axis length.
    #[error("historical time axes differ: obs has {obs_len} steps, simh has {simh_len}")]
    TimeLengthMismatch {
        /// Time-axis length of the observed historical grid.
        obs_len: usize,
        /// Time-axis length of the simulated historical grid.
        simh_len: usize,
    },

    /// Returned when the input grids differ in cell shape.
    #[error("cell shapes differ: expected {expected:?}, got {got:?} for '{name}'")]
    CellShapeMismatch {
        /// Name of the offending grid.
        name: String,
        /// The expected cell shape.
        expected: Vec<usize>,
        /// The actual cell shape.
        got: Vec<usize>,
    },

    /// Returned when a grouping-key slice does not match its time axis.
    #[error("grouping key length {got} does not match the {axis} time axis ({expected} steps)")]
    GroupLengthMismatch {
        /// The time axis the keys belong to.
        axis: String,
        /// Expected number of keys.
        expected: usize,
        /// Actual number of keys.
        got: usize,
    },

    /// Returned when a grouping key has no time steps in a period that
    /// the method needs to calibrate or correct.
    #[error("grouping key {key} has no time steps in the {period} period")]
    MissingGroup {
        /// The grouping-key value.
        key: u32,
        /// The period lacking that key.
        period: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a method fails on one (group x cell) unit.
    #[error(transparent)]
    Method(#[from] MethodError),
}
