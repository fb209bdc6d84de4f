use crate::models::Signal;

/// Advisor sentences rendered for one analyzed ticker
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// Action, RSI, volatility, and confidence sentences joined by spaces
    pub summary: String,
    /// The action guidance sentence alone
    pub advice: String,
}

/// Render the advisor text for an analysis result
///
/// Four independent axes each select one canned sentence: the signal
/// action, the RSI regime, the volatility regime, and the confidence
/// regime. Every threshold comparison is strict, so boundary values
/// (exactly 30, 70, 3, 1, 80, 50) read as the neutral or lower regime.
/// Identical inputs always render identical text.
pub fn interpret(
    ticker: &str,
    signal: Signal,
    rsi: f64,
    volatility: f64,
    confidence: f64,
) -> Interpretation {
    let (action, advice) = match signal {
        Signal::Buy => (
            format!(
                "{} is showing bullish momentum. Short-term trends suggest a buying opportunity.",
                ticker
            ),
            "Consider entering or adding to your position while monitoring RSI for confirmation.",
        ),
        Signal::Sell => (
            format!(
                "{} is showing bearish pressure. Indicators suggest a potential downturn.",
                ticker
            ),
            "Consider taking profit or reducing exposure until the trend stabilizes.",
        ),
        // NO_DATA never reaches this layer (the empty-input path returns
        // its own terminal summary first) but the match stays exhaustive
        Signal::Hold | Signal::NoData => (
            format!("{} is currently stable with no clear directional bias.", ticker),
            "Hold your position — wait for clearer market momentum before taking new action.",
        ),
    };

    let rsi_text = if rsi < 30.0 {
        "RSI indicates oversold conditions — possible rebound."
    } else if rsi > 70.0 {
        "RSI indicates overbought conditions — a pullback may follow."
    } else {
        "RSI is neutral — balanced buying and selling pressure."
    };

    let volatility_text = if volatility > 3.0 {
        "High volatility detected — expect price swings."
    } else if volatility > 1.0 {
        "Moderate volatility — steady market movement."
    } else {
        "Low volatility — prices are relatively stable."
    };

    let confidence_text = if confidence > 80.0 {
        "Signal strength: strong and reliable."
    } else if confidence > 50.0 {
        "Signal strength: moderate — confirm with trend continuation."
    } else {
        "Signal confidence is low — proceed with caution."
    };

    Interpretation {
        summary: format!("{} {} {} {}", action, rsi_text, volatility_text, confidence_text),
        advice: advice.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_text() {
        let text = interpret("AAPL", Signal::Buy, 50.0, 0.5, 10.0);

        assert!(text
            .summary
            .starts_with("AAPL is showing bullish momentum. Short-term trends suggest a buying opportunity."));
        assert_eq!(
            text.advice,
            "Consider entering or adding to your position while monitoring RSI for confirmation."
        );
    }

    #[test]
    fn test_sell_text() {
        let text = interpret("TSLA", Signal::Sell, 50.0, 0.5, 10.0);

        assert!(text
            .summary
            .starts_with("TSLA is showing bearish pressure. Indicators suggest a potential downturn."));
        assert_eq!(
            text.advice,
            "Consider taking profit or reducing exposure until the trend stabilizes."
        );
    }

    #[test]
    fn test_hold_text() {
        let text = interpret("MSFT", Signal::Hold, 50.0, 0.5, 10.0);

        assert!(text
            .summary
            .starts_with("MSFT is currently stable with no clear directional bias."));
        assert_eq!(
            text.advice,
            "Hold your position — wait for clearer market momentum before taking new action."
        );
    }

    #[test]
    fn test_summary_is_four_space_joined_sentences() {
        let text = interpret("AAPL", Signal::Hold, 50.0, 0.5, 10.0);

        assert_eq!(
            text.summary,
            "AAPL is currently stable with no clear directional bias. \
             RSI is neutral — balanced buying and selling pressure. \
             Low volatility — prices are relatively stable. \
             Signal confidence is low — proceed with caution."
        );
    }

    #[test]
    fn test_rsi_regimes() {
        let oversold = interpret("X", Signal::Hold, 29.99, 0.0, 0.0);
        let neutral_low = interpret("X", Signal::Hold, 30.0, 0.0, 0.0);
        let neutral_high = interpret("X", Signal::Hold, 70.0, 0.0, 0.0);
        let overbought = interpret("X", Signal::Hold, 70.01, 0.0, 0.0);

        assert!(oversold
            .summary
            .contains("RSI indicates oversold conditions — possible rebound."));
        assert!(neutral_low
            .summary
            .contains("RSI is neutral — balanced buying and selling pressure."));
        assert!(neutral_high
            .summary
            .contains("RSI is neutral — balanced buying and selling pressure."));
        assert!(overbought
            .summary
            .contains("RSI indicates overbought conditions — a pullback may follow."));
    }

    #[test]
    fn test_volatility_regimes() {
        let low = interpret("X", Signal::Hold, 50.0, 1.0, 0.0);
        let moderate = interpret("X", Signal::Hold, 50.0, 1.01, 0.0);
        let boundary = interpret("X", Signal::Hold, 50.0, 3.0, 0.0);
        let high = interpret("X", Signal::Hold, 50.0, 3.01, 0.0);

        assert!(low
            .summary
            .contains("Low volatility — prices are relatively stable."));
        assert!(moderate
            .summary
            .contains("Moderate volatility — steady market movement."));
        assert!(boundary
            .summary
            .contains("Moderate volatility — steady market movement."));
        assert!(high
            .summary
            .contains("High volatility detected — expect price swings."));
    }

    #[test]
    fn test_confidence_regimes() {
        let low = interpret("X", Signal::Hold, 50.0, 0.0, 50.0);
        let moderate = interpret("X", Signal::Hold, 50.0, 0.0, 50.01);
        let boundary = interpret("X", Signal::Hold, 50.0, 0.0, 80.0);
        let strong = interpret("X", Signal::Hold, 50.0, 0.0, 80.01);

        assert!(low
            .summary
            .contains("Signal confidence is low — proceed with caution."));
        assert!(moderate
            .summary
            .contains("Signal strength: moderate — confirm with trend continuation."));
        assert!(boundary
            .summary
            .contains("Signal strength: moderate — confirm with trend continuation."));
        assert!(strong
            .summary
            .contains("Signal strength: strong and reliable."));
    }

    #[test]
    fn test_deterministic() {
        let a = interpret("AAPL", Signal::Buy, 65.0, 2.5, 42.0);
        let b = interpret("AAPL", Signal::Buy, 65.0, 2.5, 42.0);

        assert_eq!(a, b);
    }
}
