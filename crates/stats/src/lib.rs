//! Statistical helper functions for Themis bias adjustment.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Root-mean-square error between two equal-length slices.
/// Returns 0.0 if either slice is empty.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn rmse(predicted: &[f64], target: &[f64]) -> f64 {
    assert_eq!(
        predicted.len(),
        target.len(),
        "rmse: slices must have equal length"
    );
    if predicted.is_empty() {
        return 0.0;
    }
    let n = predicted.len() as f64;
    let sum_sq: f64 = predicted
        .iter()
        .zip(target.iter())
        .map(|(&p, &t)| (p - t) * (p - t))
        .sum();
    (sum_sq / n).sqrt()
}
