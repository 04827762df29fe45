//! View a signals CSV as an interactive terminal chart.

use crossover::chart::{run_chart, ChartModel};
use crossover::config::Config;
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

    // Any input problem (missing file, missing columns, bad numbers)
    // surfaces here, before the terminal is taken over.
    let rows = store::read_signals(&config.signals_path)?;
    info!("Loaded {} signal rows from {}", rows.len(), config.signals_path);

    let model = ChartModel::from_rows(&rows);
    run_chart(model).await?;

    Ok(())
}
