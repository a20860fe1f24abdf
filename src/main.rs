//! payroll-engine server binary.
//!
//! Loads the payroll rate tables from the configuration directory (or the
//! path given with `--config`) and serves the calculation API over HTTP.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Payroll calculation engine server")]
struct Cli {
    /// Directory holding `payroll.yaml` and the `rates/` tables.
    #[arg(short, long, default_value = "./config/payroll")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("failed to load payroll configuration from {:?}", cli.config))?;

    tracing::info!(
        code = %config.metadata().code,
        version = %config.metadata().version,
        rate_tables = config.rate_configs().len(),
        "Loaded payroll configuration"
    );

    let app = create_router(AppState::new(config));

    tracing::info!("Listening on http://{}", cli.bind);
    let listener = TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
