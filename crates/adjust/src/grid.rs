//! Array model for gridded time series.

use crate::error::AdjustError;

/// A time series, or a stack of time series over extra grid dimensions.
///
/// Values are stored cell-major: all time steps of cell 0, then all time
/// steps of cell 1, and so on. `cell_shape` describes the extra array
/// axes (e.g. `[n_lat, n_lon]`) in row-major order; an empty shape is a
/// plain 1-D series. Coordinate labels and other metadata are the
/// caller's concern; the grid carries numbers and shape only.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGrid {
    values: Vec<f64>,
    n_time: usize,
    cell_shape: Vec<usize>,
}

impl SeriesGrid {
    /// Wraps a plain 1-D time series.
    ///
    /// # Errors
    ///
    /// Returns [`AdjustError::EmptyGrid`] if `values` is empty.
    pub fn from_series(values: Vec<f64>) -> Result<Self, AdjustError> {
        let n_time = values.len();
        Self::new(values, n_time, Vec::new())
    }

    /// Builds a grid from a cell-major value buffer.
    ///
    /// # Errors
    ///
    /// Returns [`AdjustError::EmptyGrid`] for an empty buffer or a zero
    /// time axis, and [`AdjustError::GridShape`] if the buffer length is
    /// not `n_time * cell_count`.
    pub fn new(
        values: Vec<f64>,
        n_time: usize,
        cell_shape: Vec<usize>,
    ) -> Result<Self, AdjustError> {
        let n_cells: usize = cell_shape.iter().product();
        if values.is_empty() || n_time == 0 || n_cells == 0 {
            return Err(AdjustError::EmptyGrid {
                name: "values".to_string(),
            });
        }
        if values.len() != n_time * n_cells {
            return Err(AdjustError::GridShape {
                values_len: values.len(),
                n_time,
                n_cells,
            });
        }
        Ok(Self {
            values,
            n_time,
            cell_shape,
        })
    }

    /// Returns the time-axis length.
    pub fn n_time(&self) -> usize {
        self.n_time
    }

    /// Returns the extra-dimension shape (empty for a 1-D series).
    pub fn cell_shape(&self) -> &[usize] {
        &self.cell_shape
    }

    /// Returns the number of grid cells (1 for a 1-D series).
    pub fn cell_count(&self) -> usize {
        self.cell_shape.iter().product()
    }

    /// Returns the time series of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell >= cell_count()`.
    pub fn series(&self, cell: usize) -> &[f64] {
        let start = cell * self.n_time;
        &self.values[start..start + self.n_time]
    }

    /// Returns the full value buffer, cell-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes `self` and returns the owned value buffer.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_series_single_cell() {
        let grid = SeriesGrid::from_series(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(grid.n_time(), 3);
        assert_eq!(grid.cell_count(), 1);
        assert!(grid.cell_shape().is_empty());
        assert_eq!(grid.series(0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn gridded_cell_slices() {
        let values: Vec<f64> = (0..12).map(f64::from).collect();
        let grid = SeriesGrid::new(values, 3, vec![2, 2]).unwrap();
        assert_eq!(grid.cell_count(), 4);
        assert_eq!(grid.series(0), &[0.0, 1.0, 2.0]);
        assert_eq!(grid.series(3), &[9.0, 10.0, 11.0]);
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            SeriesGrid::from_series(vec![]),
            Err(AdjustError::EmptyGrid { .. })
        ));
        assert!(matches!(
            SeriesGrid::new(vec![1.0], 1, vec![0]),
            Err(AdjustError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn shape_mismatch_rejected() {
        assert!(matches!(
            SeriesGrid::new(vec![1.0, 2.0, 3.0], 2, vec![2]),
            Err(AdjustError::GridShape {
                values_len: 3,
                n_time: 2,
                n_cells: 2
            })
        ));
    }
}
