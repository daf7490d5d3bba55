//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::error::AppError;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::coach_routes::create_coach_router())
        .merge(routes::record_routes::create_record_router());

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn initialize_api(app_state: AppState) -> Result<Router, AppError> {
    tracing::info!("Initializing API router...");
    Ok(create_router(app_state))
}
