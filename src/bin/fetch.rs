//! Download daily OHLC bars for a ticker and save them as CSV.

use crossover::config::Config;
use crossover::sources::YahooFinanceClient;
use crossover::store;
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
    info!(
        "Fetching {} daily bars for {}..{} (adjusted: {})",
        config.ticker, config.start, config.end, config.adjusted
    );

    let client = YahooFinanceClient::new();
    let bars = client
        .get_daily_bars(&config.ticker, config.start, config.end, config.adjusted)
        .await?;
    info!("Fetched {} bars for {}", bars.len(), config.ticker);

    store::write_bars(&config.bars_path, &bars)?;

    println!("Saved {} data to {}", config.ticker, config.bars_path);
    Ok(())
}
