//! # themis-adjust
//!
//! Method registry and grouping/grid dispatcher.
//!
//! [`adjust`] resolves a method name, partitions the input grids into
//! independent (grouping key x grid cell) units, applies the method from
//! `themis-methods` to each unit's 1-D series, and reassembles the
//! outputs into a grid of the projection's shape (the observed shape for
//! the delta method). Units share no state, so grid cells can fan out
//! over a rayon pool when `n_jobs > 1`; each unit writes to
//! pre-determined output slots and assembly is deterministic regardless
//! of scheduling order. Any unit error aborts the whole invocation.
//!
//! # Example
//!
//! ```
//! use themis_adjust::{AdjustConfig, SeriesGrid, adjust};
//! use themis_methods::Kind;
//!
//! let obs = SeriesGrid::from_series(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! let simh = SeriesGrid::from_series(vec![0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
//! let simp = SeriesGrid::from_series(vec![10.0, 11.0, 12.0, 13.0, 14.0]).unwrap();
//!
//! let config = AdjustConfig::new(Kind::Additive);
//! let corrected = adjust("linear_scaling", &obs, &simh, &simp, None, &config).unwrap();
//! assert_eq!(corrected.values(), &[11.0, 12.0, 13.0, 14.0, 15.0]);
//! ```

mod config;
mod error;
mod grid;
mod group;
mod registry;

pub use config::AdjustConfig;
pub use error::AdjustError;
pub use grid::SeriesGrid;
pub use group::Grouping;
pub use registry::{ALL_METHODS, Method};

use rayon::prelude::*;
use tracing::debug;

use crate::group::{gather, scatter};

/// Looks up a method by name without applying it.
///
/// The returned [`Method`] can be invoked directly through
/// [`Method::apply_series`], which is how the intentionally
/// unimplemented `empirical_quantile_mapping` reports its status.
///
/// # Errors
///
/// Returns [`AdjustError::UnknownMethod`] for unregistered names.
pub fn get_function(method: &str) -> Result<Method, AdjustError> {
    Method::from_name(method)
}

/// Adjusts a simulated projection against observed reference data.
///
/// `obs` and `simh` cover the historical overlap and must share their
/// time axis; `simp` is the projection being corrected. All three must
/// share the cell shape. `group` optionally partitions each time axis by
/// a categorical key so every key calibrates on its own statistics.
///
/// The output grid has `simp`'s shape, except for the delta method whose
/// output covers the observed timeline (deliberate contract: it is the
/// observed data shifted by the projected change).
///
/// # Errors
///
/// Fails fast with [`AdjustError`] on unknown method names, invalid
/// configuration, shape mismatches, a missing grouping key where one is
/// required, or any per-unit method failure. No partial output is ever
/// returned.
#[tracing::instrument(skip(obs, simh, simp, group, config))]
pub fn adjust(
    method: &str,
    obs: &SeriesGrid,
    simh: &SeriesGrid,
    simp: &SeriesGrid,
    group: Option<&Grouping>,
    config: &AdjustConfig,
) -> Result<SeriesGrid, AdjustError> {
    let method = Method::from_name(method)?;
    config.validate()?;
    validate_shapes(obs, simh, simp)?;

    match group {
        Some(g) => g.validate(obs.n_time(), simp.n_time())?,
        None if method.requires_group() => {
            return Err(AdjustError::GroupRequired {
                method: method.name().to_string(),
            });
        }
        None => {}
    }

    let n_cells = simp.cell_count();
    let out_time = if method.output_matches_obs() {
        obs.n_time()
    } else {
        simp.n_time()
    };

    debug!(
        method = method.name(),
        n_cells,
        n_jobs = config.n_jobs(),
        grouped = group.is_some(),
        "dispatching adjustment"
    );

    let cells: Vec<Vec<f64>> = if config.n_jobs() > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.n_jobs())
            .build()
            .map_err(|e| AdjustError::InvalidConfig {
                reason: format!("failed to build worker pool: {e}"),
            })?;
        pool.install(|| {
            (0..n_cells)
                .into_par_iter()
                .map(|cell| adjust_cell(method, obs, simh, simp, group, config, cell))
                .collect::<Result<Vec<_>, _>>()
        })?
    } else {
        (0..n_cells)
            .map(|cell| adjust_cell(method, obs, simh, simp, group, config, cell))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut values = Vec::with_capacity(out_time * n_cells);
    for cell in cells {
        values.extend(cell);
    }
    SeriesGrid::new(values, out_time, simp.cell_shape().to_vec())
}

/// Validates that the three grids agree on shape.
fn validate_shapes(
    obs: &SeriesGrid,
    simh: &SeriesGrid,
    simp: &SeriesGrid,
) -> Result<(), AdjustError> {
    if obs.n_time() != simh.n_time() {
        return Err(AdjustError::TimeLengthMismatch {
            obs_len: obs.n_time(),
            simh_len: simh.n_time(),
        });
    }
    for (name, grid) in [("simh", simh), ("simp", simp)] {
        if grid.cell_shape() != obs.cell_shape() {
            return Err(AdjustError::CellShapeMismatch {
                name: name.to_string(),
                expected: obs.cell_shape().to_vec(),
                got: grid.cell_shape().to_vec(),
            });
        }
    }
    Ok(())
}

/// Adjusts a single grid cell, partitioning by grouping key if given.
fn adjust_cell(
    method: Method,
    obs: &SeriesGrid,
    simh: &SeriesGrid,
    simp: &SeriesGrid,
    group: Option<&Grouping>,
    config: &AdjustConfig,
    cell: usize,
) -> Result<Vec<f64>, AdjustError> {
    let obs_series = obs.series(cell);
    let simh_series = simh.series(cell);
    let simp_series = simp.series(cell);

    let Some(grouping) = group else {
        return Ok(method.apply_series(obs_series, simh_series, simp_series, config)?);
    };

    let out_len = if method.output_matches_obs() {
        obs.n_time()
    } else {
        simp.n_time()
    };
    let mut output = vec![0.0; out_len];

    for part in grouping.partition() {
        if part.hist.is_empty() {
            // No calibration data for this key.
            return Err(AdjustError::MissingGroup {
                key: part.key,
                period: "historical".to_string(),
            });
        }
        if part.future.is_empty() {
            if method.output_matches_obs() {
                // The delta method writes the observed timeline, so every
                // historical key needs a change signal from the projection.
                return Err(AdjustError::MissingGroup {
                    key: part.key,
                    period: "projection".to_string(),
                });
            }
            continue;
        }

        let obs_g = gather(obs_series, &part.hist);
        let simh_g = gather(simh_series, &part.hist);
        let simp_g = gather(simp_series, &part.future);

        let unit = method.apply_series(&obs_g, &simh_g, &simp_g, config)?;

        if method.output_matches_obs() {
            scatter(&mut output, &part.hist, &unit);
        } else {
            scatter(&mut output, &part.future, &unit);
        }
    }

    Ok(output)
}
