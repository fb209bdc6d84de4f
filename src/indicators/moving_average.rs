/// Trailing mean of `values` over at most `window` observations
///
/// The window shrinks at the start of the series: position `i` averages the
/// last `min(i + 1, window)` values, so the output is aligned with the input
/// and defined from the very first element.
///
/// # Example
/// ```
/// use finsight::indicators::rolling_mean;
///
/// let ma = rolling_mean(&[2.0, 4.0, 6.0], 2);
/// assert_eq!(ma, vec![2.0, 3.0, 5.0]);
/// ```
///
/// # Panics
/// Panics if `window` is zero.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window > 0, "window must be at least 1");

    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            mean(&values[start..=i])
        })
        .collect()
}

/// Trailing mean of `values` over exactly `window` observations
///
/// Positions without a full window behind them (inclusive of the current
/// value) are `None`; the caller decides the warm-up substitution.
pub fn rolling_mean_exact(values: &[f64], window: usize) -> Vec<Option<f64>> {
    assert!(window > 0, "window must be at least 1");

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                Some(mean(&values[i + 1 - window..=i]))
            }
        })
        .collect()
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
