use crate::indicators::moving_average::rolling_mean;

/// Relative Strength Index over a trailing window, one value per bar
///
/// RSI measures the magnitude of recent price changes to evaluate
/// overbought or oversold conditions.
///
/// Values:
/// - RSI > 70: Overbought
/// - RSI < 30: Oversold
///
/// Gains and losses are averaged over a window that shrinks at the start of
/// the series, so the output is aligned with the input. Whenever the average
/// loss is zero the ratio is undefined and the neutral value 50 is emitted;
/// this covers the first bar (no prior close) and any window made up
/// entirely of gains.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<f64> {
    assert!(period > 0, "period must be at least 1");

    if closes.is_empty() {
        return Vec::new();
    }

    // Bar-over-bar changes; the first bar has no prior close and counts
    // as neither gain nor loss
    let mut gains = vec![0.0; closes.len()];
    let mut losses = vec![0.0; closes.len()];
    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = change.abs();
        }
    }

    let avg_gains = rolling_mean(&gains, period);
    let avg_losses = rolling_mean(&losses, period);

    avg_gains
        .iter()
        .zip(&avg_losses)
        .map(|(&avg_gain, &avg_loss)| {
            if avg_loss == 0.0 {
                50.0
            } else {
                let rs = avg_gain / avg_loss;
                100.0 - (100.0 / (1.0 + rs))
            }
        })
        .collect()
}
