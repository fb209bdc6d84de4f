use crate::indicators::moving_average::mean;

/// Trailing sample standard deviation of `values` over at most `window`
/// observations
///
/// Same shrinking-window alignment as `rolling_mean`. The deviation uses
/// the n-1 (sample) denominator; positions with fewer than two observations
/// have no defined sample deviation and report 0.0.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window > 0, "window must be at least 1");

    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            sample_std(&values[start..=i])
        })
        .collect()
}

fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let avg = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_known_values() {
        // Sample std of [2, 4] = sqrt(((2-3)^2 + (4-3)^2) / 1) = sqrt(2)
        let std = rolling_std(&[2.0, 4.0], 5);

        assert_eq!(std[0], 0.0);
        assert!((std[1] - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_std_single_value_is_zero() {
        assert_eq!(rolling_std(&[100.0], 5), vec![0.0]);
    }

    #[test]
    fn test_std_constant_series_is_zero() {
        let std = rolling_std(&[50.0, 50.0, 50.0, 50.0], 3);
        assert_eq!(std, vec![0.0; 4]);
    }

    #[test]
    fn test_std_full_window() {
        // Sample std of [10, 20, 30] = sqrt((100 + 0 + 100) / 2) = 10
        let std = rolling_std(&[10.0, 20.0, 30.0], 5);
        assert!((std[2] - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_std_window_slides() {
        // Last window of size 2 only sees [30, 31]
        let std = rolling_std(&[10.0, 30.0, 31.0], 2);
        assert!((std[2] - (0.5_f64).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_std_empty_input() {
        assert!(rolling_std(&[], 5).is_empty());
    }
}
