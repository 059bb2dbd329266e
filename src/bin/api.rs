//! Veridia API Server
//!
//! Run with: cargo run --bin veridia-api
//!
//! # Configuration
//!
//! Read from `--config <path>` or the default search path, then overridden by:
//! - `VERIDIA_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `VERIDIA_API_PORT`: Port to listen on (default: 8090)
//! - `VERIDIA_SEED_SAMPLE_DATA`: Start with the sample applications (default: true)
//! - `VERIDIA_LOG_LEVEL` / `VERIDIA_LOG_FORMAT`: Logging (default: info / pretty)
//! - `RUST_LOG`: Full filter directive, wins over the level above

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use veridia::api::{serve, ApiState};
use veridia::config::Config;
use veridia::session::AppState;

#[derive(Parser)]
#[command(name = "veridia-api")]
#[command(about = "Veridia Hiring API server")]
#[command(version)]
struct Args {
    /// Config file (defaults to the usual search path)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, source) =
        Config::resolve(args.config.as_deref()).context("Failed to load config")?;
    veridia::logging::init(&config.logging).context("Failed to initialise logging")?;

    tracing::info!("Starting Veridia API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Config: {}", source);
    tracing::info!(
        seed_sample_data = config.catalog.seed_sample_data,
        "Initialising application state"
    );

    let app = AppState::new(&config.catalog);
    tracing::info!("{} applications loaded", app.store().len());

    let state = ApiState::new(app, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Veridia API server stopped");
    Ok(())
}
