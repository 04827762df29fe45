//! CSV persistence for price bars and signal rows.
//!
//! One file format per type: bars are `Date,Open,High,Low,Close`, signals
//! are `Price,MACD,Signal,Trade`. Writes always replace the destination
//! wholesale, so re-running a step with the same inputs produces an
//! identical file.

use crate::error::{AppError, Result};
use crate::types::{DailyBar, SignalRow};
use std::path::Path;
use tracing::warn;

/// Write OHLC bars to a CSV file, overwriting any existing file.
pub fn write_bars<P: AsRef<Path>>(path: P, bars: &[DailyBar]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for bar in bars {
        writer.serialize(bar)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read OHLC bars back from a CSV file.
pub fn read_bars<P: AsRef<Path>>(path: P) -> Result<Vec<DailyBar>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut bars = Vec::new();
    for record in reader.deserialize() {
        bars.push(record?);
    }
    Ok(bars)
}

/// Read a close-price series from a CSV file.
///
/// Accepts either a `Date,Close` layout (close in column 1) or the full
/// `Date,Open,High,Low,Close` layout (close in column 4). Rows with an
/// unparseable close are skipped with a warning rather than aborting the
/// run.
pub fn read_closes<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let mut reader = csv::Reader::from_path(path)?;
    let column = match reader.headers()?.len() {
        0 | 1 => {
            return Err(AppError::InvalidInput(
                "price file needs a Date,Close or Date,Open,High,Low,Close layout".to_string(),
            ))
        }
        2..=4 => 1,
        _ => 4,
    };

    let mut closes = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        match record.get(column).map(str::trim).map(str::parse::<f64>) {
            Some(Ok(price)) => closes.push(price),
            _ => warn!("Line {}: invalid close price, skipping row", i + 2),
        }
    }

    if closes.is_empty() {
        return Err(AppError::InvalidInput(
            "price file contains no usable rows".to_string(),
        ));
    }

    Ok(closes)
}

/// Write signal rows to a CSV file with fixed 4-decimal formatting,
/// overwriting any existing file.
pub fn write_signals<P: AsRef<Path>>(path: P, rows: &[SignalRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Price", "MACD", "Signal", "Trade"])?;
    for row in rows {
        writer.write_record([
            format!("{:.4}", row.price),
            format!("{:.4}", row.macd),
            format!("{:.4}", row.signal),
            row.trade.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read signal rows from a CSV file.
///
/// The header must include Price, MACD, Signal, and Trade; a missing
/// column or non-numeric cell is an error, surfaced before anything is
/// rendered.
pub fn read_signals<P: AsRef<Path>>(path: P) -> Result<Vec<SignalRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }

    if rows.is_empty() {
        return Err(AppError::InvalidInput(
            "signals file contains no rows".to_string(),
        ));
    }

    Ok(rows)
}
