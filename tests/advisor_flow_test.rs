use chrono::{Duration, Utc};

use finsight::analysis::{analyze, analyze_with_reference, AnalysisOutcome};
use finsight::models::{validate_bars, CompanyProfile, PriceBar, Signal};
use finsight::portfolio::{review_portfolio, Holding, Recommendation};
use finsight::reference::ReferenceData;
use finsight::screening::{
    activity_report, screen_transaction, Prediction, RuleBasedModel, Transaction, TransactionKind,
};
use finsight::synthetic::{MarketScenario, ScenarioGenerator};

fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    let start = Utc::now() - Duration::minutes(closes.len() as i64 * 5);
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            timestamp: start + Duration::minutes(i as i64 * 5),
            close,
        })
        .collect()
}

#[test]
fn test_advisor_flow() {
    // Initialize logging
    let _ = tracing_subscriber::fmt::try_init();

    println!("=== Starting Advisor Flow Test ===\n");

    // 1. Generate a price series
    println!("1. Generating synthetic uptrend...");
    let mut generator = ScenarioGenerator::new(42);
    let bars = generator.generate(MarketScenario::Uptrend, 30, 5);
    assert_eq!(bars.len(), 30);
    validate_bars(&bars).expect("synthetic bars should be valid");
    println!("   ✓ {} bars generated", bars.len());

    // 2. Analyze it
    println!("\n2. Running the analysis engine...");
    let outcome = analyze("AAPL", &bars);
    let report = outcome.report().expect("non-empty series yields a report");

    assert_eq!(report.ticker, "AAPL");
    assert_eq!(report.company_name, "Apple Inc.");
    assert_eq!(report.sector, "Technology");
    assert!((0.0..=100.0).contains(&report.analysis.rsi));
    assert!((0.0..=100.0).contains(&report.analysis.confidence));
    assert!(report.analysis.volatility >= 0.0);
    assert!(report.analysis.latest_price > 0.0);
    assert!(!report.analysis.summary.is_empty());
    assert!(!report.analysis.advice.is_empty());
    println!(
        "   ✓ Signal: {:?} (confidence {:.2}%)",
        report.analysis.signal, report.analysis.confidence
    );

    // 3. Same input, same report
    println!("\n3. Checking determinism...");
    let replay = analyze("AAPL", &bars);
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        serde_json::to_string(&replay).unwrap()
    );
    println!("   ✓ Re-analysis is byte-identical");

    // 4. Review a portfolio
    println!("\n4. Reviewing a sample portfolio...");
    let holdings = vec![
        Holding {
            symbol: "AAPL".to_string(),
            shares: 10.0,
            purchase_price: 100.0,
            current_price: 110.0,
        },
        Holding {
            symbol: "TSLA".to_string(),
            shares: 2.0,
            purchase_price: 200.0,
            current_price: 180.0,
        },
    ];
    let portfolio = review_portfolio(&holdings).unwrap();

    assert_eq!(portfolio.total_symbols, 2);
    assert_eq!(portfolio.total_value, 1460.0);
    assert_eq!(portfolio.holdings[0].recommendation, Recommendation::Sell);
    assert_eq!(portfolio.holdings[1].recommendation, Recommendation::Buy);
    println!("   ✓ Total value: {:.2}", portfolio.total_value);

    // 5. Screen transactions
    println!("\n5. Screening transactions...");
    let mut model = RuleBasedModel::new(42);
    let transactions = vec![
        sample_transaction(TransactionKind::Transfer, 25_000.0),
        sample_transaction(TransactionKind::Payment, 120.0),
        sample_transaction(TransactionKind::CashOut, 600.0),
    ];
    let screened: Vec<_> = transactions
        .iter()
        .map(|tx| screen_transaction(&mut model, tx))
        .collect();

    assert_eq!(screened[0].prediction, Prediction::Fraud);
    assert_eq!(screened[1].prediction, Prediction::Legit);

    let activity = activity_report(&screened);
    assert_eq!(activity.total, 3);
    assert_eq!(activity.fraud, 1);
    assert_eq!(activity.safe, 2);
    println!("   ✓ {} screened, {} flagged", activity.total, activity.fraud);

    println!("\n=== Advisor Flow Test Complete ✅ ===");
}

#[test]
fn test_single_bar_report_values() {
    let outcome = analyze("AAPL", &bars_from_closes(&[100.0]));
    let report = outcome.report().unwrap();

    assert_eq!(report.analysis.signal, Signal::Hold);
    assert_eq!(report.analysis.latest_price, 100.0);
    assert_eq!(report.analysis.ma_5, 100.0);
    assert_eq!(report.analysis.ma_10, 100.0);
    assert_eq!(report.analysis.rsi, 50.0);
    assert_eq!(report.analysis.volatility, 0.0);
    assert_eq!(report.analysis.confidence, 0.0);
    assert!(report
        .analysis
        .summary
        .starts_with("AAPL is currently stable with no clear directional bias."));
}

#[test]
fn test_steady_climb_buys_exactly_when_long_window_fills() {
    // Through nine bars the long average rides the short average, so the
    // tenth bar is the first chance for a crossover
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    let outcome = analyze("AAPL", &bars_from_closes(&closes));
    let report = outcome.report().unwrap();

    assert_eq!(report.analysis.signal, Signal::Buy);
    assert_eq!(report.analysis.ma_5, 107.0);
    assert_eq!(report.analysis.ma_10, 104.5);
    assert!(report
        .analysis
        .summary
        .starts_with("AAPL is showing bullish momentum."));
    assert_eq!(
        report.analysis.advice,
        "Consider entering or adding to your position while monitoring RSI for confirmation."
    );

    // One more bar: the gap persists, which is no longer a fresh cross
    let closes: Vec<f64> = (0..11).map(|i| 100.0 + i as f64).collect();
    let outcome = analyze("AAPL", &bars_from_closes(&closes));
    assert_eq!(outcome.signal(), Signal::Hold);
}

#[test]
fn test_flat_series_is_quiet() {
    let outcome = analyze("AAPL", &bars_from_closes(&[50.0; 5]));
    let report = outcome.report().unwrap();

    assert_eq!(report.analysis.signal, Signal::Hold);
    assert_eq!(report.analysis.rsi, 50.0);
    assert_eq!(report.analysis.volatility, 0.0);
    assert_eq!(report.analysis.confidence, 0.0);
    assert!(report
        .analysis
        .summary
        .contains("RSI is neutral — balanced buying and selling pressure."));
    assert!(report
        .analysis
        .summary
        .contains("Low volatility — prices are relatively stable."));
    assert!(report
        .analysis
        .summary
        .contains("Signal confidence is low — proceed with caution."));
}

#[test]
fn test_empty_series_wire_format() {
    let outcome = analyze("AAPL", &[]);
    assert_eq!(outcome.signal(), Signal::NoData);

    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, r#"{"signal":"NO_DATA","summary":"No data available."}"#);
}

#[test]
fn test_unsorted_bars_produce_the_sorted_report() {
    let mut generator = ScenarioGenerator::new(7);
    let bars = generator.generate(MarketScenario::Volatile, 25, 5);

    let mut scrambled = bars.clone();
    scrambled.reverse();
    scrambled.swap(3, 17);
    scrambled.swap(0, 11);

    assert_eq!(analyze("AAPL", &bars), analyze("AAPL", &scrambled));
}

#[test]
fn test_custom_reference_source() {
    struct DeskReference;

    impl ReferenceData for DeskReference {
        fn profile(&self, ticker: &str) -> CompanyProfile {
            CompanyProfile {
                name: format!("{} Holdings", ticker),
                sector: "Synthetic".to_string(),
            }
        }
    }

    let outcome = analyze_with_reference(&DeskReference, "NVDA", &bars_from_closes(&[10.0, 11.0]));
    let report = outcome.report().unwrap();

    assert_eq!(report.company_name, "NVDA Holdings");
    assert_eq!(report.sector, "Synthetic");
}

#[test]
fn test_report_survives_json_round_trip() {
    let outcome = analyze("AAPL", &bars_from_closes(&[100.0, 101.0, 99.5, 102.25]));

    let json = serde_json::to_string(&outcome).unwrap();
    let parsed: AnalysisOutcome = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, outcome);
}

fn sample_transaction(kind: TransactionKind, amount: f64) -> Transaction {
    Transaction {
        step: 1,
        kind,
        amount,
        name_orig: "C1001".to_string(),
        old_balance_orig: amount * 2.0,
        new_balance_orig: amount,
        name_dest: "M2002".to_string(),
        old_balance_dest: 0.0,
        new_balance_dest: amount,
    }
}
