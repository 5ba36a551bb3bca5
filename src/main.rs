use crate::api::AppState;
use crate::app_config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod api;
mod app_config;
mod domain;
mod ssc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let ssc_client = ssc::new_client(&config)?;
    info!("✅  Initialized SSC client for {}", config.ssc().url());

    let address = config.server().address();
    let listener = TcpListener::bind(&address).await?;
    let app = api::router(AppState::new(ssc_client, config));

    info!("🔥 {} is up and running on {}", env!("CARGO_PKG_NAME"), address);
    axum::serve(listener, app).await?;

    Ok(())
}
