use crate::api::handlers::{get_satellite_locations, home};
use crate::app_config::AppConfig;
use axum::Router;
use axum::http::Method;
use axum::routing::get;
use reqwest::Client;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    client: Client,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(client: Client, config: AppConfig) -> Self {
        AppState {
            client,
            config: Arc::new(config),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]).allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/api/get-satellite-locations", get(get_satellite_locations))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
