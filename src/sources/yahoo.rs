//! Yahoo Finance API client for historical stock data.
//!
//! Fetches daily OHLC bars for a symbol over a date range.
//! Uses the unofficial Yahoo Finance chart API (no API key required).

use crate::error::{AppError, Result};
use crate::types::DailyBar;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
    adjclose: Option<Vec<YahooAdjClose>>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct YahooAdjClose {
    adjclose: Option<Vec<Option<f64>>>,
}

/// Normalize symbol for Yahoo Finance API.
/// Yahoo uses hyphens instead of dots for share classes (e.g., BRK-B not BRK.B)
fn normalize_yahoo_symbol(symbol: &str) -> String {
    symbol.to_uppercase().replace('.', "-")
}

/// Midnight UTC for a date, as a Unix timestamp.
fn date_to_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
    base_url: String,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Fetch daily OHLC bars for a symbol over a half-open date range
    /// `[start, end)`.
    ///
    /// When `adjusted` is true, O/H/L/C are scaled by the provider's
    /// adjusted close so prices account for splits and dividends;
    /// otherwise the raw quote values are returned unchanged.
    ///
    /// Bars come back sorted by date ascending with duplicates dropped.
    pub async fn get_daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
        adjusted: bool,
    ) -> Result<Vec<DailyBar>> {
        let yahoo_symbol = normalize_yahoo_symbol(symbol);
        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&includePrePost=false",
            self.base_url,
            yahoo_symbol,
            date_to_timestamp(start),
            date_to_timestamp(end),
        );

        debug!("Fetching Yahoo Finance data: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Yahoo API error: {}",
                response.status()
            )));
        }

        let data: YahooChartResponse = response.json().await?;

        // The envelope carries its own error object even on HTTP 200
        if let Some(error) = data.chart.error {
            return Err(AppError::ExternalApi(format!(
                "Yahoo API error: {} - {}",
                error.code, error.description
            )));
        }

        let result = data
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| AppError::ExternalApi("No results in response".to_string()))?;

        let timestamps = result
            .timestamp
            .ok_or_else(|| AppError::ExternalApi("No timestamps in response".to_string()))?;

        let adjclose = result
            .indicators
            .adjclose
            .and_then(|a| a.into_iter().next())
            .and_then(|a| a.adjclose)
            .unwrap_or_default();

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ExternalApi("No quote data in response".to_string()))?;

        let opens = quote.open.unwrap_or_default();
        let highs = quote.high.unwrap_or_default();
        let lows = quote.low.unwrap_or_default();
        let closes = quote.close.unwrap_or_default();

        let mut bars = Vec::new();
        for (i, &timestamp) in timestamps.iter().enumerate() {
            let open = opens.get(i).and_then(|v| *v).unwrap_or(0.0);
            let high = highs.get(i).and_then(|v| *v).unwrap_or(0.0);
            let low = lows.get(i).and_then(|v| *v).unwrap_or(0.0);
            let close = closes.get(i).and_then(|v| *v).unwrap_or(0.0);

            // Skip invalid data points (halted days come back as nulls)
            if close <= 0.0 {
                continue;
            }

            let date = DateTime::<Utc>::from_timestamp(timestamp, 0)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| {
                    AppError::ExternalApi(format!("Invalid timestamp in response: {}", timestamp))
                })?;

            // The provider is loose about range boundaries; enforce the
            // half-open contract locally.
            if date < start || date >= end {
                continue;
            }

            let factor = if adjusted {
                match adjclose.get(i).and_then(|v| *v) {
                    Some(adj) if adj > 0.0 => adj / close,
                    _ => 1.0,
                }
            } else {
                1.0
            };

            bars.push(DailyBar {
                date,
                open: open * factor,
                high: high * factor,
                low: low * factor,
                close: close * factor,
            });
        }

        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);

        if bars.is_empty() {
            return Err(AppError::ExternalApi(format!(
                "No bars returned for {} in {}..{}",
                symbol, start, end
            )));
        }

        Ok(bars)
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}
