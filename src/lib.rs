//! Crossover - MACD momentum strategy pipeline
//!
//! Three stages, each a binary over this library:
//! - `fetch`: download daily OHLC bars for a ticker into a CSV file
//! - `signal`: compute MACD crossover trade signals from a price CSV
//! - `chart`: view a signals CSV as an interactive terminal chart

pub mod chart;
pub mod config;
pub mod error;
pub mod sources;
pub mod store;
pub mod strategy;
pub mod types;
