use std::env;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hotel_ops_engine::api::{AppState, create_router};
use hotel_ops_engine::config::ConfigLoader;
use hotel_ops_engine::models::CompanySettings;
use hotel_ops_engine::repository::JsonFileRepository;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("HOTEL_OPS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("HOTEL_OPS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        property = %config.metadata().name,
        schedules = config.config().tax_schedules().len(),
        "Configuration loaded"
    );

    // Data file is optional; without one the store lives in memory.
    let state = match env::var("HOTEL_OPS_DATA") {
        Ok(path) => {
            let seed = CompanySettings {
                company_name: config.metadata().name.clone(),
                hotel: config.hotel().clone(),
            };
            let repository = JsonFileRepository::open(&path, seed)?;
            info!(data_file = %path, "Using JSON data file");
            AppState::new(config, Arc::new(repository))
        }
        Err(_) => {
            info!("Using in-memory store");
            AppState::in_memory(config)
        }
    };

    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Hotel operations engine listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
