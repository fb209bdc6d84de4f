use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One observed price for a ticker at a point in time
///
/// This is the engine's only market input - no fake OHLCV
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Classified trading signal for the latest bar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
    /// Terminal outcome for an empty input series
    NoData,
}

/// Per-bar indicator values, aligned with the sorted input series
///
/// Intermediate computation state only; reports carry a rounded snapshot
/// of the last row instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow {
    pub ma_short: f64,
    pub ma_long: f64,
    pub rsi: f64,
    pub volatility: f64,
}

/// Display metadata for a ticker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub sector: String,
}

/// Rejected price bar
#[derive(Debug, Error, PartialEq)]
pub enum InvalidBar {
    #[error("bar {index} has a non-finite close ({close})")]
    NonFiniteClose { index: usize, close: f64 },
    #[error("bar {index} has a negative close ({close})")]
    NegativeClose { index: usize, close: f64 },
}

/// Check a bar series before analysis
///
/// Closes must be finite and non-negative; a zero close is legal (delisted
/// or halted instruments report zero). Returns the first offending bar.
pub fn validate_bars(bars: &[PriceBar]) -> Result<(), InvalidBar> {
    for (index, bar) in bars.iter().enumerate() {
        if !bar.close.is_finite() {
            return Err(InvalidBar::NonFiniteClose {
                index,
                close: bar.close,
            });
        }
        if bar.close < 0.0 {
            return Err(InvalidBar::NegativeClose {
                index,
                close: bar.close,
            });
        }
    }

    Ok(())
}
