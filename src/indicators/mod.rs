// Technical indicators module
// Series-aligned rolling computations (MA, RSI, volatility) for the
// analysis engine

pub mod moving_average;
pub mod rsi;
pub mod volatility;

pub use moving_average::{rolling_mean, rolling_mean_exact};
pub use rsi::rsi_series;
pub use volatility::rolling_std;
