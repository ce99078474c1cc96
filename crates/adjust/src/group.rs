//! Grouping-key partitioning of time axes.

use std::collections::BTreeMap;

use crate::error::AdjustError;

/// Caller-supplied grouping keys, one per time step on each axis.
///
/// The core never inspects calendars: a collaborator derives a
/// categorical key (e.g. month-of-year) from its own time coordinate and
/// passes one key per historical time step and one per future time step.
/// Matching key values pair a future sub-series with the historical
/// sub-series that calibrates its correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    hist: Vec<u32>,
    future: Vec<u32>,
}

/// Index sets of one grouping-key value across both time axes.
#[derive(Debug, Clone)]
pub(crate) struct GroupIndices {
    pub(crate) key: u32,
    pub(crate) hist: Vec<usize>,
    pub(crate) future: Vec<usize>,
}

impl Grouping {
    /// Creates a grouping from per-step keys for the historical and
    /// future axes.
    pub fn new(hist: Vec<u32>, future: Vec<u32>) -> Self {
        Self { hist, future }
    }

    /// Returns the historical-axis keys.
    pub fn hist(&self) -> &[u32] {
        &self.hist
    }

    /// Returns the future-axis keys.
    pub fn future(&self) -> &[u32] {
        &self.future
    }

    /// Validates the key slices against the two time-axis lengths.
    pub(crate) fn validate(
        &self,
        hist_len: usize,
        future_len: usize,
    ) -> Result<(), AdjustError> {
        if self.hist.len() != hist_len {
            return Err(AdjustError::GroupLengthMismatch {
                axis: "historical".to_string(),
                expected: hist_len,
                got: self.hist.len(),
            });
        }
        if self.future.len() != future_len {
            return Err(AdjustError::GroupLengthMismatch {
                axis: "future".to_string(),
                expected: future_len,
                got: self.future.len(),
            });
        }
        Ok(())
    }

    /// Partitions both axes by key value, in ascending key order.
    ///
    /// Every key present on either axis yields one entry; an index set may
    /// be empty on one side, which the dispatcher turns into a
    /// [`AdjustError::MissingGroup`] when the method needs that side.
    pub(crate) fn partition(&self) -> Vec<GroupIndices> {
        let mut map: BTreeMap<u32, GroupIndices> = BTreeMap::new();
        for (i, &k) in self.hist.iter().enumerate() {
            map.entry(k)
                .or_insert_with(|| GroupIndices {
                    key: k,
                    hist: Vec::new(),
                    future: Vec::new(),
                })
                .hist
                .push(i);
        }
        for (i, &k) in self.future.iter().enumerate() {
            map.entry(k)
                .or_insert_with(|| GroupIndices {
                    key: k,
                    hist: Vec::new(),
                    future: Vec::new(),
                })
                .future
                .push(i);
        }
        map.into_values().collect()
    }
}

/// Copies the values at `indices` out of a series.
pub(crate) fn gather(series: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| series[i]).collect()
}

/// Writes `values` back to `indices` of an output slice.
pub(crate) fn scatter(output: &mut [f64], indices: &[usize], values: &[f64]) {
    debug_assert_eq!(indices.len(), values.len());
    for (&i, &v) in indices.iter().zip(values.iter()) {
        output[i] = v;
    }
}
