//! Numeric helpers for window statistics
//!
//! Sums are accumulated as `i128` so that any window of `i64` values adds up
//! exactly; conversion to floating point happens once, at the final division.

/// Exact sum of the given values.
pub fn exact_sum<'a, I>(values: I) -> i128
where
    I: IntoIterator<Item = &'a i64>,
{
    values.into_iter().map(|&v| i128::from(v)).sum()
}

/// Arithmetic mean of the given values, or 0.0 when there are none.
pub fn mean<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a i64>,
    I::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    let count = values.len();
    if count == 0 {
        return 0.0;
    }

    exact_sum(values) as f64 / count as f64
}
