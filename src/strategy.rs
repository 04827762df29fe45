//! MACD crossover strategy.
//!
//! - MACD Line = EMA(12) - EMA(26)
//! - Signal Line = EMA(9) of MACD Line
//!
//! Buy signal: MACD crosses above signal line
//! Sell signal: MACD crosses below signal line
//!
//! EMAs are seeded with the first value of the series so every output
//! series has the same length as the input; the signals file stays
//! row-for-row aligned with the price series it was computed from.

use crate::error::{AppError, Result};
use crate::types::SignalRow;
use tracing::info;

/// MACD crossover strategy.
pub struct MacdStrategy {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for MacdStrategy {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl MacdStrategy {
    /// Minimum number of prices needed for a meaningful calculation.
    pub fn min_periods(&self) -> usize {
        self.slow_period
    }

    /// Compute MACD/signal/trade rows for a close-price series.
    pub fn evaluate(&self, prices: &[f64]) -> Result<Vec<SignalRow>> {
        if prices.len() < self.min_periods() {
            return Err(AppError::InvalidInput(format!(
                "need at least {} data points for MACD calculation, got {}",
                self.min_periods(),
                prices.len()
            )));
        }

        let fast_ema = calculate_ema(prices, self.fast_period);
        let slow_ema = calculate_ema(prices, self.slow_period);

        let macd_line: Vec<f64> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = calculate_ema(&macd_line, self.signal_period);
        let trades = generate_signals(&macd_line, &signal_line);

        Ok(prices
            .iter()
            .zip(macd_line)
            .zip(signal_line)
            .zip(trades)
            .map(|(((&price, macd), signal), trade)| SignalRow {
                price,
                macd,
                signal,
                trade,
            })
            .collect())
    }
}

/// Calculate EMA for a series of values, seeded with the first value.
/// Output length equals input length.
pub fn calculate_ema(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut ema = Vec::with_capacity(values.len());
    ema.push(values[0]);

    for &value in &values[1..] {
        let prev = *ema.last().unwrap();
        ema.push((value - prev) * multiplier + prev);
    }

    ema
}

/// Generate buy/sell signals from MACD crossovers.
///
/// +1 where MACD crosses above the signal line between consecutive rows,
/// -1 where it crosses below, 0 elsewhere. Row 0 is always 0 since there
/// is no previous row to cross from.
pub fn generate_signals(macd: &[f64], signal: &[f64]) -> Vec<i32> {
    let mut signals = vec![0; macd.len()];

    for i in 1..macd.len() {
        if macd[i - 1] < signal[i - 1] && macd[i] > signal[i] {
            signals[i] = 1;
        } else if macd[i - 1] > signal[i - 1] && macd[i] < signal[i] {
            signals[i] = -1;
        }
    }

    signals
}

/// Result of a backtest run.
#[derive(Debug, Clone)]
pub struct BacktestSummary {
    pub initial_cash: f64,
    pub final_value: f64,
    pub return_pct: f64,
    pub trades: usize,
}

/// Backtest the signal rows with simple all-in/all-out execution.
///
/// A buy converts all cash to shares at that row's price; a sell
/// liquidates the whole position. The final value marks any open position
/// to the last price.
pub fn backtest(rows: &[SignalRow], initial_cash: f64) -> Result<BacktestSummary> {
    let last_price = rows
        .last()
        .map(|r| r.price)
        .ok_or_else(|| AppError::InvalidInput("no rows to backtest".to_string()))?;

    let mut cash = initial_cash;
    let mut shares = 0.0;
    let mut trades = 0;

    for row in rows {
        if row.trade == 1 && cash > 0.0 {
            shares = cash / row.price;
            cash = 0.0;
            trades += 1;
            info!("BUY at ${:.2} ({:.4} shares)", row.price, shares);
        } else if row.trade == -1 && shares > 0.0 {
            cash = shares * row.price;
            shares = 0.0;
            trades += 1;
            info!("SELL at ${:.2} (cash ${:.2})", row.price, cash);
        }
    }

    let final_value = cash + shares * last_price;
    Ok(BacktestSummary {
        initial_cash,
        final_value,
        return_pct: (final_value - initial_cash) / initial_cash * 100.0,
        trades,
    })
}
