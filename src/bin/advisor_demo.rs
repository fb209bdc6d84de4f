use anyhow::Result;

use finsight::analysis::analyze;
use finsight::portfolio::{review_portfolio, Holding};
use finsight::screening::{
    activity_report, screen_transaction, Prediction, RuleBasedModel, Transaction, TransactionKind,
};
use finsight::synthetic::{MarketScenario, ScenarioGenerator};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("finsight=info")
        .init();

    println!("\n╔═══════════════════════════════════════════════════════╗");
    println!("║              FINSIGHT ADVISOR DEMO                    ║");
    println!("╚═══════════════════════════════════════════════════════╝");

    run_signal_engine();
    run_portfolio_review()?;
    run_screening();

    println!("\n═══════════════════════════════════════════════════════\n");

    Ok(())
}

fn run_signal_engine() {
    println!("\n📊 Signal engine across market scenarios\n");
    println!(
        "{:<28} {:>8} {:>8} {:>8} {:>12}",
        "Scenario", "Signal", "RSI", "Vol", "Confidence%"
    );
    println!("{}", "─".repeat(70));

    let scenarios = vec![
        (MarketScenario::Uptrend, "📈 Uptrend (+2% daily)"),
        (MarketScenario::Downtrend, "📉 Downtrend (-2% daily)"),
        (MarketScenario::Sideways, "↔️  Sideways (mean-reverting)"),
        (MarketScenario::Volatile, "⚡ Volatile (±5% swings)"),
    ];

    for (scenario, name) in scenarios {
        let mut generator = ScenarioGenerator::new(42);
        let bars = generator.generate(scenario, 30, 5);

        let outcome = analyze("AAPL", &bars);
        if let Some(report) = outcome.report() {
            println!(
                "{:<28} {:>8} {:>8.2} {:>8.2} {:>12.2}",
                name,
                format!("{:?}", report.analysis.signal),
                report.analysis.rsi,
                report.analysis.volatility,
                report.analysis.confidence
            );
        }
    }
}

fn run_portfolio_review() -> Result<()> {
    println!("\n💼 Portfolio review\n");

    let holdings = vec![
        Holding {
            symbol: "AAPL".to_string(),
            shares: 10.0,
            purchase_price: 176.5,
            current_price: 194.2,
        },
        Holding {
            symbol: "TSLA".to_string(),
            shares: 4.0,
            purchase_price: 262.0,
            current_price: 241.1,
        },
        Holding {
            symbol: "MSFT".to_string(),
            shares: 6.0,
            purchase_price: 410.0,
            current_price: 415.3,
        },
    ];

    let report = review_portfolio(&holdings)?;

    println!(
        "{:<8} {:>10} {:>10} {:>9} {:>12}  {}",
        "Symbol", "Bought", "Now", "Change%", "Value", "Recommendation"
    );
    println!("{}", "─".repeat(70));
    for review in &report.holdings {
        println!(
            "{:<8} {:>10.2} {:>10.2} {:>9.2} {:>12.2}  {:?}",
            review.symbol,
            review.purchase_price,
            review.current_price,
            review.change_pct,
            review.market_value,
            review.recommendation
        );
    }
    println!("{}", "─".repeat(70));
    println!(
        "{} symbols, total value {:.2}",
        report.total_symbols, report.total_value
    );

    Ok(())
}

fn run_screening() {
    println!("\n🛡️  Transaction screening\n");

    let transactions = vec![
        sample_transaction(TransactionKind::Payment, 230.5),
        sample_transaction(TransactionKind::Transfer, 18_750.0),
        sample_transaction(TransactionKind::CashOut, 4_100.0),
        sample_transaction(TransactionKind::Transfer, 900.0),
        sample_transaction(TransactionKind::Debit, 65.0),
        sample_transaction(TransactionKind::CashIn, 1_200.0),
    ];

    let mut model = RuleBasedModel::new(42);
    let screened: Vec<_> = transactions
        .iter()
        .map(|tx| screen_transaction(&mut model, tx))
        .collect();

    for entry in &screened {
        let label = match entry.prediction {
            Prediction::Fraud => "🚨 FRAUD",
            Prediction::Legit => "   legit",
        };
        println!(
            "{} {:>9?} {:>10.2}  confidence={:.2} risk={:.2}",
            label,
            entry.transaction.kind,
            entry.transaction.amount,
            entry.confidence,
            entry.risk_score
        );
    }

    let report = activity_report(&screened);
    println!(
        "\n{} screened: {} flagged, {} safe",
        report.total, report.fraud, report.safe
    );
}

fn sample_transaction(kind: TransactionKind, amount: f64) -> Transaction {
    Transaction {
        step: 1,
        kind,
        amount,
        name_orig: "C84071".to_string(),
        old_balance_orig: amount * 3.0,
        new_balance_orig: amount * 2.0,
        name_dest: "M11923".to_string(),
        old_balance_dest: 0.0,
        new_balance_dest: amount,
    }
}
