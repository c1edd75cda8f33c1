//! Utility functions for the rating engine

/// Clamp a value into `[0, 1]`
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Clamp a value into `[-1, 1]`
pub fn clamp_signed_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Arithmetic mean, or `None` when there is nothing to average
///
/// Values are summed in iteration order, so callers must feed them in a
/// stable order to get reproducible results.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
