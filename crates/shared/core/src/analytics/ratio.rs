use crate::entities::DataPoint;
use crate::values::Price;

/// Ratio of two values with IEEE-754 float division
///
/// Never fails: `x / 0.0` is signed infinity, `0.0 / x` is zero and
/// `0.0 / 0.0` is NaN.
#[inline]
pub fn compute_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator
}

impl DataPoint {
    /// Midpoint ratio of this data point against another
    pub fn price_ratio(&self, other: &DataPoint) -> Price {
        compute_ratio(self.price, other.price)
    }
}
