//! Compute MACD crossover signals from a price CSV and backtest them.

use crossover::config::Config;
use crossover::store;
use crossover::strategy::{self, MacdStrategy};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crossover=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let closes = store::read_closes(&config.bars_path)?;
    info!("Read {} price records from {}", closes.len(), config.bars_path);

    let rows = MacdStrategy::default().evaluate(&closes)?;
    let summary = strategy::backtest(&rows, config.initial_cash)?;

    info!(
        "Backtest: {} trades, ${:.2} -> ${:.2} ({:+.2}%)",
        summary.trades, summary.initial_cash, summary.final_value, summary.return_pct
    );

    store::write_signals(&config.signals_path, &rows)?;

    println!("Signals exported to {}", config.signals_path);
    Ok(())
}
