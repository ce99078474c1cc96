//! Guarded division for multiplicative corrections.

/// Default bound applied when a ratio cannot be formed.
pub const DEFAULT_MAX_SCALING_FACTOR: f64 = 10.0;

/// Divides `num` by `den`, substituting `num * max_scaling_factor` when the
/// quotient is not finite (zero denominator or overflow).
///
/// A `0.0 / 0.0` quotient therefore resolves to `0.0`, and a non-zero
/// numerator over a zero denominator resolves to the bounded sentinel
/// instead of propagating an infinity through the adjustment.
pub fn safe_ratio(num: f64, den: f64, max_scaling_factor: f64) -> f64 {
    let ratio = num / den;
    if ratio.is_finite() {
        ratio
    } else {
        num * max_scaling_factor
    }
}
