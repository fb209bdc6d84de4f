use anyhow::Result;
use clap::{Parser, ValueEnum};

use finsight::analysis::analyze;
use finsight::models::validate_bars;
use finsight::synthetic::{MarketScenario, ScenarioGenerator};

#[derive(Parser)]
#[command(version, about = "Run the advisor analysis over a synthetic price series")]
struct Cli {
    /// Ticker symbol to report on
    #[arg(long, default_value = "AAPL")]
    ticker: String,

    /// Market scenario to generate
    #[arg(long, value_enum, default_value_t = Scenario::Uptrend)]
    scenario: Scenario,

    /// Number of bars to generate
    #[arg(long, default_value_t = 30)]
    bars: usize,

    /// Minutes between bars
    #[arg(long, default_value_t = 5)]
    interval: i64,

    /// Seed for the series generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scenario {
    Uptrend,
    Downtrend,
    Sideways,
    Volatile,
}

impl From<Scenario> for MarketScenario {
    fn from(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Uptrend => MarketScenario::Uptrend,
            Scenario::Downtrend => MarketScenario::Downtrend,
            Scenario::Sideways => MarketScenario::Sideways,
            Scenario::Volatile => MarketScenario::Volatile,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("finsight=info")
        .init();

    let cli = Cli::parse();

    let mut generator = ScenarioGenerator::new(cli.seed);
    let bars = generator.generate(cli.scenario.into(), cli.bars, cli.interval);
    validate_bars(&bars)?;

    let outcome = analyze(&cli.ticker, &bars);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{}", json);

    Ok(())
}
