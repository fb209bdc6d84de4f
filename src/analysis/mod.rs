// Analysis engine
// Builds the per-bar indicator table for one ticker's price history and
// derives the crossover signal, confidence score, and advisor text

pub mod interpret;

use serde::{Deserialize, Serialize};

use crate::indicators::{rolling_mean, rolling_mean_exact, rolling_std, rsi_series};
use crate::models::{IndicatorRow, PriceBar, Signal};
use crate::reference::{ReferenceData, StaticReference};

pub use interpret::{interpret, Interpretation};

/// Short moving-average window (bars)
pub const SHORT_WINDOW: usize = 5;
/// Long moving-average window (bars)
pub const LONG_WINDOW: usize = 10;
/// RSI averaging period (bars)
pub const RSI_PERIOD: usize = 14;
/// Volatility window (bars)
pub const VOLATILITY_WINDOW: usize = 5;

/// Summary rendered for an empty input series
pub const NO_DATA_SUMMARY: &str = "No data available.";

/// Rounded numeric snapshot plus advisor text for the latest bar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    pub latest_price: f64,
    pub ma_5: f64,
    pub ma_10: f64,
    pub rsi: f64,
    pub volatility: f64,
    pub confidence: f64,
    pub signal: Signal,
    pub summary: String,
    pub advice: String,
}

/// Full advisor report for one ticker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockReport {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    pub analysis: Analysis,
}

/// Result of one analysis call
///
/// Serializes either as the full report object or, for an empty input
/// series, as the terminal `{"signal": "NO_DATA", "summary": ...}` form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    NoData { signal: Signal, summary: String },
    Report(StockReport),
}

impl AnalysisOutcome {
    fn no_data() -> Self {
        AnalysisOutcome::NoData {
            signal: Signal::NoData,
            summary: NO_DATA_SUMMARY.to_string(),
        }
    }

    /// The classified signal; NO_DATA for the empty-input outcome
    pub fn signal(&self) -> Signal {
        match self {
            AnalysisOutcome::NoData { signal, .. } => *signal,
            AnalysisOutcome::Report(report) => report.analysis.signal,
        }
    }

    /// The full report, if the series had at least one bar
    pub fn report(&self) -> Option<&StockReport> {
        match self {
            AnalysisOutcome::NoData { .. } => None,
            AnalysisOutcome::Report(report) => Some(report),
        }
    }
}

/// Analyze one ticker's price history using the built-in reference data
///
/// # Example
/// ```
/// use chrono::Utc;
/// use finsight::analysis::analyze;
/// use finsight::models::{PriceBar, Signal};
///
/// let bars = vec![PriceBar { timestamp: Utc::now(), close: 100.0 }];
/// let outcome = analyze("AAPL", &bars);
/// assert_eq!(outcome.signal(), Signal::Hold);
/// ```
pub fn analyze(ticker: &str, bars: &[PriceBar]) -> AnalysisOutcome {
    analyze_with_reference(&StaticReference, ticker, bars)
}

/// Analyze one ticker's price history, resolving display metadata through
/// the supplied reference-data source
///
/// Bars may arrive in any order; the engine sorts by timestamp before
/// computing anything, so repeated calls over the same set of bars produce
/// identical reports. An empty slice yields the terminal NO_DATA outcome.
pub fn analyze_with_reference<R: ReferenceData>(
    reference: &R,
    ticker: &str,
    bars: &[PriceBar],
) -> AnalysisOutcome {
    if bars.is_empty() {
        tracing::debug!("{}: no price history, nothing to analyze", ticker);
        return AnalysisOutcome::no_data();
    }

    let mut sorted = bars.to_vec();
    sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    let closes: Vec<f64> = sorted.iter().map(|bar| bar.close).collect();

    let rows = indicator_rows(&closes);
    let latest = rows[rows.len() - 1];
    // With a single row the latest bar is its own predecessor, so neither
    // crossover condition can fire
    let prev = if rows.len() > 1 {
        rows[rows.len() - 2]
    } else {
        latest
    };

    let signal = classify_crossover(&latest, &prev);
    let confidence = compute_confidence(latest.ma_short, latest.ma_long);

    tracing::debug!(
        "{}: MA5={:.4}, MA10={:.4}, RSI={:.2}, Vol={:.4} -> {:?} ({:.2}% confidence)",
        ticker,
        latest.ma_short,
        latest.ma_long,
        latest.rsi,
        latest.volatility,
        signal,
        confidence
    );
    if signal == Signal::Buy || signal == Signal::Sell {
        tracing::info!("📈 {}: moving-average crossover fired: {:?}", ticker, signal);
    }

    // Interpretation reads the unrounded RSI and volatility; only the
    // confidence threshold sees the rounded value
    let text = interpret(ticker, signal, latest.rsi, latest.volatility, confidence);
    let profile = reference.profile(ticker);

    AnalysisOutcome::Report(StockReport {
        ticker: ticker.to_string(),
        company_name: profile.name,
        sector: profile.sector,
        analysis: Analysis {
            latest_price: round_to(closes[closes.len() - 1], 2),
            ma_5: round_to(latest.ma_short, 3),
            ma_10: round_to(latest.ma_long, 3),
            rsi: round_to(latest.rsi, 2),
            volatility: round_to(latest.volatility, 2),
            confidence,
            signal,
            summary: text.summary,
            advice: text.advice,
        },
    })
}

/// Build the aligned indicator table for a time-sorted close series
///
/// The short average and volatility use shrinking warm-up windows, so every
/// row is populated. The long average is undefined until ten bars exist;
/// those rows fall back to the short average, which keeps the two averages
/// equal through warm-up so no crossover can fire before the tenth bar.
pub fn indicator_rows(closes: &[f64]) -> Vec<IndicatorRow> {
    let ma_short = rolling_mean(closes, SHORT_WINDOW);
    let ma_long = rolling_mean_exact(closes, LONG_WINDOW);
    let rsi = rsi_series(closes, RSI_PERIOD);
    let volatility = rolling_std(closes, VOLATILITY_WINDOW);

    (0..closes.len())
        .map(|i| IndicatorRow {
            ma_short: ma_short[i],
            ma_long: ma_long[i].unwrap_or(ma_short[i]),
            rsi: rsi[i],
            volatility: volatility[i],
        })
        .collect()
}

/// Classify the two most recent indicator rows into a signal
///
/// BUY and SELL fire only on a fresh cross between the previous and latest
/// rows; a gap that already existed reads as HOLD, as does a touch where
/// the averages are exactly equal.
fn classify_crossover(latest: &IndicatorRow, prev: &IndicatorRow) -> Signal {
    if latest.ma_short > latest.ma_long && prev.ma_short <= prev.ma_long {
        Signal::Buy
    } else if latest.ma_short < latest.ma_long && prev.ma_short >= prev.ma_long {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Confidence in the current signal: the gap between the two moving
/// averages as a percentage of the long average, capped at 100 and rounded
/// to two decimals
///
/// A zero long average (every close in the window was zero) reports zero
/// confidence instead of dividing by zero.
///
/// # Example
/// ```
/// use finsight::analysis::compute_confidence;
///
/// assert_eq!(compute_confidence(105.0, 100.0), 5.0);
/// ```
pub fn compute_confidence(ma_short: f64, ma_long: f64) -> f64 {
    if ma_long == 0.0 {
        return 0.0;
    }

    let spread_pct = ((ma_short - ma_long).abs() / ma_long) * 100.0;
    round_to(spread_pct.min(100.0), 2)
}

/// Round half away from zero to `places` decimal places
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
