//! Route definitions.

use std::sync::{Arc, RwLock};

use axum::routing::{get, post};
use axum::Router;

use volgrid_render::Exporter;

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};

/// Create the API router from a configuration.
///
/// Loads the persisted dataset from `config.data_path` when one exists, so
/// a restart does not require a re-upload.
pub fn create_router(config: &ServerConfig) -> Router {
    let dataset = volgrid_core::dataset::Dataset::from_path(&config.data_path).ok();

    let state = Arc::new(AppState {
        dataset: RwLock::new(dataset),
        exporter: Exporter::new(&config.output_dir).with_spacing(config.spacing),
        data_path: config.data_path.clone().into(),
    });

    create_router_with_state(state)
}

/// Create the API router around existing state.
pub fn create_router_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Dataset upload
        .route("/api/v1/dataset", post(handlers::upload_dataset))
        // Currency listings
        .route("/api/v1/currencies", get(handlers::list_currencies))
        .route("/api/v1/currencies/g10", get(handlers::list_g10))
        // On-demand images
        .route("/api/v1/grids/:pair", get(handlers::get_grid))
        .route("/api/v1/carry/:pair", get(handlers::get_carry))
        // State
        .with_state(state)
}
