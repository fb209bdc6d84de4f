// Synthetic price data
// Seeded scenario generator behind the demo binary and integration tests

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::PriceBar;

/// Market scenario shapes for synthetic series generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketScenario {
    /// Steady uptrend with noise (+2% daily average)
    Uptrend,
    /// Steady downtrend with noise (-2% daily average)
    Downtrend,
    /// Sideways/choppy market (±1% around mean)
    Sideways,
    /// High volatility (±5% large swings)
    Volatile,
}

/// Generates synthetic close prices for demos and tests
pub struct ScenarioGenerator {
    rng: StdRng,
    base_price: f64,
}

impl ScenarioGenerator {
    /// Create a new generator with a seed for reproducibility
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            base_price: 150.0,
        }
    }

    /// Set the price the series starts from
    pub fn with_base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    /// Generate bars for a specific market scenario
    ///
    /// # Arguments
    /// * `scenario` - The market scenario to simulate
    /// * `num_bars` - Number of bars to generate
    /// * `interval_minutes` - Minutes between bars
    ///
    /// # Returns
    /// Time-sorted bars ending near the current time
    pub fn generate(
        &mut self,
        scenario: MarketScenario,
        num_bars: usize,
        interval_minutes: i64,
    ) -> Vec<PriceBar> {
        let start_time = Utc::now() - Duration::minutes(num_bars as i64 * interval_minutes);

        match scenario {
            MarketScenario::Uptrend => {
                self.generate_trend(start_time, num_bars, interval_minutes, 0.02)
            }
            MarketScenario::Downtrend => {
                self.generate_trend(start_time, num_bars, interval_minutes, -0.02)
            }
            MarketScenario::Sideways => {
                self.generate_sideways(start_time, num_bars, interval_minutes)
            }
            MarketScenario::Volatile => {
                self.generate_volatile(start_time, num_bars, interval_minutes)
            }
        }
    }

    /// Generate a trending series: `daily_drift` per day with noise
    fn generate_trend(
        &mut self,
        start_time: DateTime<Utc>,
        num_bars: usize,
        interval_minutes: i64,
        daily_drift: f64,
    ) -> Vec<PriceBar> {
        let mut bars = Vec::with_capacity(num_bars);
        let mut current_price = self.base_price;

        // Scale the daily drift to the bar interval so the trend holds
        // regardless of spacing
        let drift_per_interval = daily_drift / (24.0 * 60.0 / interval_minutes as f64);

        for i in 0..num_bars {
            let timestamp = start_time + Duration::minutes(i as i64 * interval_minutes);

            // Drift plus reduced noise so the trend is dominant
            let drift = current_price * drift_per_interval;
            let noise = current_price * self.rng.gen_range(-0.001..0.001); // ±0.1% noise
            current_price += drift + noise;

            bars.push(PriceBar {
                timestamp,
                close: current_price,
            });
        }

        bars
    }

    /// Generate a sideways market: mean-reverting random walk
    fn generate_sideways(
        &mut self,
        start_time: DateTime<Utc>,
        num_bars: usize,
        interval_minutes: i64,
    ) -> Vec<PriceBar> {
        let mut bars = Vec::with_capacity(num_bars);
        let mut current_price = self.base_price;
        let mean_price = self.base_price;

        for i in 0..num_bars {
            let timestamp = start_time + Duration::minutes(i as i64 * interval_minutes);

            let reversion = (mean_price - current_price) * 0.1; // 10% pull to mean
            let noise = current_price * self.rng.gen_range(-0.01..0.01); // ±1% noise
            current_price += reversion + noise;

            bars.push(PriceBar {
                timestamp,
                close: current_price,
            });
        }

        bars
    }

    /// Generate a volatile market: large swings with a floor
    fn generate_volatile(
        &mut self,
        start_time: DateTime<Utc>,
        num_bars: usize,
        interval_minutes: i64,
    ) -> Vec<PriceBar> {
        let mut bars = Vec::with_capacity(num_bars);
        let mut current_price = self.base_price;

        for i in 0..num_bars {
            let timestamp = start_time + Duration::minutes(i as i64 * interval_minutes);

            let change = current_price * self.rng.gen_range(-0.05..0.05); // ±5% per bar
            current_price += change;

            // Keep the series away from zero so percentage math stays sane
            if current_price < self.base_price * 0.5 {
                current_price = self.base_price * 0.5;
            }

            bars.push(PriceBar {
                timestamp,
                close: current_price,
            });
        }

        bars
    }
}
