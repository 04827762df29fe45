use crate::error::{AppError, Result};
use chrono::NaiveDate;
use std::env;

/// Application configuration.
///
/// Loaded from environment variables (a `.env` file is honored via
/// dotenvy in each binary); unset variables fall back to the defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ticker symbol to fetch.
    pub ticker: String,
    /// Start of the date range (inclusive).
    pub start: NaiveDate,
    /// End of the date range (exclusive).
    pub end: NaiveDate,
    /// Whether prices are adjusted for splits/dividends.
    pub adjusted: bool,
    /// Destination for fetched OHLC bars.
    pub bars_path: String,
    /// Signals file path (written by `signal`, read by `chart`).
    pub signals_path: String,
    /// Starting cash for the backtest.
    pub initial_cash: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticker: "TSLA".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 6, 23).expect("valid date"),
            end: NaiveDate::from_ymd_opt(2025, 6, 22).expect("valid date"),
            adjusted: false,
            bars_path: "tsla_data.csv".to_string(),
            signals_path: "signals.csv".to_string(),
            initial_cash: 10_000.0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults above. Malformed dates or
    /// an empty range are rejected here, before any network or file I/O.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let start = parse_date_env("START_DATE", defaults.start)?;
        let end = parse_date_env("END_DATE", defaults.end)?;
        if start >= end {
            return Err(AppError::Config(format!(
                "START_DATE {} must be before END_DATE {}",
                start, end
            )));
        }

        Ok(Self {
            ticker: env::var("TICKER").unwrap_or(defaults.ticker),
            start,
            end,
            adjusted: env::var("ADJUSTED")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.adjusted),
            bars_path: env::var("BARS_PATH").unwrap_or(defaults.bars_path),
            signals_path: env::var("SIGNALS_PATH").unwrap_or(defaults.signals_path),
            initial_cash: env::var("INITIAL_CASH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.initial_cash),
        })
    }
}

fn parse_date_env(key: &str, default: NaiveDate) -> Result<NaiveDate> {
    match env::var(key) {
        Ok(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| AppError::Config(format!("{} {:?} is not YYYY-MM-DD: {}", key, raw, e))),
        Err(_) => Ok(default),
    }
}
