// crates/shared-kernel/src/value_objects/ratio.rs

/// Real-valued `numerator / denominator`, defined as `0.0` when the denominator is zero.
///
/// Every ratio and average in the workspace goes through here so that an empty
/// input never turns into `NaN` or a division error.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
