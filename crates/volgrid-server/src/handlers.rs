//! Request handlers.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use volgrid_core::dataset::Dataset;
use volgrid_core::g10::g10_pairs;
use volgrid_core::types::CurrencyPair;
use volgrid_render::{Exporter, GridRenderer};

/// Application state.
pub struct AppState {
    /// The active dataset; empty until the first upload.
    pub dataset: RwLock<Option<Dataset>>,
    /// Exporter configured for the output directory.
    pub exporter: Exporter<GridRenderer>,
    /// Where uploaded CSV bytes are persisted.
    pub data_path: PathBuf,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Upload response.
#[derive(Serialize)]
pub struct UploadResponse {
    pairs: usize,
    rows: usize,
}

/// Accepts a raw CSV body, replaces the active dataset, and clears
/// previously generated images so stale outputs cannot be served.
pub async fn upload_dataset(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    let dataset = match Dataset::from_reader(body.as_ref()) {
        Ok(dataset) => dataset,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": format!("Invalid dataset: {}", e)
                })),
            );
        }
    };

    if let Some(parent) = state.data_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            return internal_error(format!("Failed to prepare data directory: {e}"));
        }
    }
    if let Err(e) = std::fs::write(&state.data_path, &body) {
        return internal_error(format!("Failed to persist dataset: {e}"));
    }
    if let Err(e) = state.exporter.clear_outputs() {
        warn!("failed to clear stale images: {e}");
    }

    let response = UploadResponse {
        pairs: dataset.pairs().len(),
        rows: dataset.len(),
    };
    info!(pairs = response.pairs, rows = response.rows, "dataset replaced");

    *state.dataset.write().expect("dataset lock poisoned") = Some(dataset);
    (
        StatusCode::OK,
        Json(serde_json::to_value(response).unwrap_or_default()),
    )
}

/// Lists every currency pair in the active dataset.
pub async fn list_currencies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    with_dataset(&state, |dataset| {
        let pairs: Vec<String> = dataset.pairs().iter().map(ToString::to_string).collect();
        (StatusCode::OK, Json(serde_json::json!({ "pairs": pairs })))
    })
}

/// Lists the G10 subset of the active dataset.
pub async fn list_g10(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    with_dataset(&state, |dataset| {
        let pairs: Vec<String> = g10_pairs(dataset).iter().map(ToString::to_string).collect();
        (StatusCode::OK, Json(serde_json::json!({ "pairs": pairs })))
    })
}

/// Serves a pair's composite volatility grid, generating it on demand
/// when the output file does not already exist.
pub async fn get_grid(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> impl IntoResponse {
    serve_image(&state, &token, Flow::Grid)
}

/// Serves a pair's carry table image, generating it on demand.
pub async fn get_carry(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> impl IntoResponse {
    serve_image(&state, &token, Flow::Carry)
}

enum Flow {
    Grid,
    Carry,
}

fn serve_image(
    state: &Arc<AppState>,
    token: &str,
    flow: Flow,
) -> axum::response::Response {
    // URL tokens carry the filename separator (or a dash) in place of "/".
    let normalized = token.replace(['|', '-'], "/");
    let Ok(requested) = CurrencyPair::parse(&normalized) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid currency pair: {token}"),
        );
    };

    let guard = state.dataset.read().expect("dataset lock poisoned");
    let Some(dataset) = guard.as_ref() else {
        return error_response(StatusCode::BAD_REQUEST, "No dataset uploaded".to_string());
    };

    let pair = if dataset.contains(&requested) {
        requested
    } else if dataset.contains(&requested.flipped()) {
        requested.flipped()
    } else {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("Currency pair not in dataset: {requested}"),
        );
    };

    let path = match flow {
        Flow::Grid => state.exporter.grid_path(&pair),
        Flow::Carry => state.exporter.carry_path(&pair),
    };

    if !path.exists() {
        let generated = match flow {
            Flow::Grid => state.exporter.export_grid(dataset, &pair),
            Flow::Carry => state.exporter.export_carry(dataset, &pair),
        };
        if let Err(e) = generated {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Generation failed: {e}"),
            );
        }
    }

    match std::fs::read(&path) {
        Ok(bytes) => {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/png".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("inline; filename=\"{filename}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read image: {e}"),
        ),
    }
}

fn with_dataset<F>(state: &Arc<AppState>, f: F) -> axum::response::Response
where
    F: FnOnce(&Dataset) -> (StatusCode, Json<serde_json::Value>),
{
    let guard = state.dataset.read().expect("dataset lock poisoned");
    match guard.as_ref() {
        Some(dataset) => f(dataset).into_response(),
        None => error_response(StatusCode::BAD_REQUEST, "No dataset uploaded".to_string()),
    }
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn internal_error(message: String) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": message })),
    )
}
