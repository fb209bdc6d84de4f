// Portfolio review module
// Per-holding ROI and valuation plus the threshold recommendation shown
// on the advisor dashboard

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Price rise (percent) beyond which taking profit is suggested
const TAKE_PROFIT_PCT: f64 = 8.0;
/// Price drop (percent) beyond which a position looks undervalued
const UNDERVALUED_PCT: f64 = -5.0;

/// One holding as supplied by the caller, already priced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub shares: f64,
    pub purchase_price: f64,
    pub current_price: f64,
}

/// Per-holding recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

/// Reviewed holding with ROI, market value, and recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoldingReview {
    pub symbol: String,
    pub purchase_price: f64,
    pub current_price: f64,
    pub change_pct: f64,
    pub market_value: f64,
    pub recommendation: Recommendation,
    pub explanation: String,
}

/// Whole-portfolio aggregation of the per-holding reviews
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioReport {
    pub total_symbols: usize,
    pub total_value: f64,
    pub holdings: Vec<HoldingReview>,
}

/// Rejected holding input
#[derive(Debug, Error, PartialEq)]
pub enum HoldingError {
    #[error("holding {symbol}: prices must be finite")]
    NonFinitePrice { symbol: String },
    #[error("holding {symbol}: purchase price must be positive (got {price})")]
    NonPositivePurchasePrice { symbol: String, price: f64 },
    #[error("holding {symbol}: shares must be a non-negative number (got {shares})")]
    InvalidShares { symbol: String, shares: f64 },
}

/// Review one holding
///
/// The change percentage is the return against the purchase price; the
/// recommendation comes from fixed thresholds on the unrounded change.
/// Boundary values (exactly +8% or -5%) read as stable.
pub fn review_holding(holding: &Holding) -> Result<HoldingReview, HoldingError> {
    validate_holding(holding)?;

    let change_pct =
        (holding.current_price - holding.purchase_price) / holding.purchase_price * 100.0;

    let (recommendation, explanation) = if change_pct > TAKE_PROFIT_PCT {
        (
            Recommendation::Sell,
            "Price rose over 8%, consider taking profit.",
        )
    } else if change_pct < UNDERVALUED_PCT {
        (
            Recommendation::Buy,
            "Price dropped over 5%, may be undervalued.",
        )
    } else {
        (
            Recommendation::Hold,
            "Price is stable — maintain your position.",
        )
    };

    tracing::debug!(
        "{}: change={:.2}% value={:.2} -> {:?}",
        holding.symbol,
        change_pct,
        holding.current_price * holding.shares,
        recommendation
    );

    Ok(HoldingReview {
        symbol: holding.symbol.clone(),
        purchase_price: holding.purchase_price,
        current_price: holding.current_price,
        change_pct: round2(change_pct),
        market_value: round2(holding.current_price * holding.shares),
        recommendation,
        explanation: explanation.to_string(),
    })
}

/// Review a whole portfolio, failing on the first invalid holding
pub fn review_portfolio(holdings: &[Holding]) -> Result<PortfolioReport, HoldingError> {
    let reviews = holdings
        .iter()
        .map(review_holding)
        .collect::<Result<Vec<_>, _>>()?;

    let total_value: f64 = reviews.iter().map(|review| review.market_value).sum();

    Ok(PortfolioReport {
        total_symbols: reviews.len(),
        total_value: round2(total_value),
        holdings: reviews,
    })
}

fn validate_holding(holding: &Holding) -> Result<(), HoldingError> {
    if !holding.purchase_price.is_finite() || !holding.current_price.is_finite() {
        return Err(HoldingError::NonFinitePrice {
            symbol: holding.symbol.clone(),
        });
    }
    if holding.purchase_price <= 0.0 {
        return Err(HoldingError::NonPositivePurchasePrice {
            symbol: holding.symbol.clone(),
            price: holding.purchase_price,
        });
    }
    if !holding.shares.is_finite() || holding.shares < 0.0 {
        return Err(HoldingError::InvalidShares {
            symbol: holding.symbol.clone(),
            shares: holding.shares,
        });
    }

    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
