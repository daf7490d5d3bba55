use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use vita::api::{self, app_state::AppState};
use vita::coach::{create_coach_service, create_coaching_client};
use vita::config::ConfigLoader;
use vita::observability::{ObservabilityState, create_observability_router};
use vita::storage::{DataStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting Vita...");

    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let store: Arc<dyn DataStore> = Arc::new(MemoryStore::new());
    info!("Data store initialized");

    let coaching_client = create_coaching_client(&config.generation)?;
    info!(
        "Coaching client initialized: {} ({})",
        config.generation.model, config.generation.base_url
    );

    let coach_service = create_coach_service(store.clone(), coaching_client);
    info!("Coach service initialized");

    let app_state = AppState::new(store, coach_service);
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        app_state.metrics.clone(),
    ));
    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
