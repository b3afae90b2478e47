// ============================================================
// Layer 1 - HTTP Surface
// ============================================================
// Routes:
//
//   GET  /                 - the UI page
//   GET  /static/script.js - the UI page's script
//   GET  /health           - liveness + whether a model exists
//   POST /predict          - {"message": str} → {"prediction": "Spam"|"Ham"}
//   POST /train-demo       - retrain from the bundled demo CSV
//   POST /train-file       - retrain from an uploaded CSV (field "file")
//   GET  /download-model   - the stored artifact, as an attachment
//
// Handlers are stateless; the only shared thing is AppState,
// which holds the model store and where the demo CSV lives.
// Everything is delegated to Layer 2 use cases.

pub mod error;
pub mod handlers;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::config::AppConfig;
use crate::data::csv_loader::CsvNormalizer;
use crate::infra::model_store::{FileModelStore, ModelStore};

/// Largest accepted request body (CSV uploads).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ModelStore>,
    pub demo_path: PathBuf,
    pub normalizer: CsvNormalizer,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            store: Arc::new(FileModelStore::new(config.model_path.clone())),
            demo_path: config.demo_path.clone(),
            normalizer: config.normalizer(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/static/script.js", get(handlers::script))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .route("/train-demo", post(handlers::train_demo))
        .route("/train-file", post(handlers::train_file))
        .route("/download-model", get(handlers::download_model))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &AppConfig) -> Result<()> {
    let state = AppState::from_config(config);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind to '{addr}'"))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    tracing::info!(
        "Model artifact: '{}', demo dataset: '{}'",
        config.model_path.display(),
        config.demo_path.display()
    );

    axum::serve(listener, router(state))
        .await
        .context("HTTP server error")?;
    Ok(())
}
