//! HTTP request handlers

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::application::download_use_case::{DownloadUseCase, MODEL_DOWNLOAD_NAME};
use crate::application::predict_use_case::{validate_message, PredictUseCase};
use crate::application::train_use_case::TrainUseCase;
use crate::data::csv_loader::{CsvBytes, DemoDataset};
use crate::domain::error::ServiceError;
use crate::domain::traits::MessageClassifier;

use super::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/script.js");

const NO_FILE_UPLOADED: &str = "No file uploaded.";

// ============================================================================
// Request / Response Bodies
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrainResponse {
    pub status: String,
    pub samples: usize,
}

impl TrainResponse {
    fn ok(samples: usize) -> Self {
        Self {
            status: "ok".to_string(),
            samples,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_trained: bool,
}

// ============================================================================
// Page Handlers
// ============================================================================

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], SCRIPT_JS)
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_trained: state.store.exists(),
    })
}

// ============================================================================
// Model Handlers
// ============================================================================

/// Classify one message.
///
/// A body that is not JSON, or has no string `message`, is
/// treated the same as an empty message.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ServiceError> {
    let request: PredictRequest = serde_json::from_slice(&body).unwrap_or_default();
    let message = request.message.unwrap_or_default();
    let text = validate_message(&message)?.to_string();

    let use_case = PredictUseCase::new(state.store.clone());
    let label = run_blocking(move || use_case.classify(&text)).await?;

    Ok(Json(PredictResponse {
        prediction: label.to_string(),
    }))
}

/// Retrain from the CSV bundled with the deployment.
pub async fn train_demo(
    State(state): State<AppState>,
) -> Result<Json<TrainResponse>, ServiceError> {
    let source = DemoDataset::new(state.demo_path.clone(), state.normalizer);
    let use_case = TrainUseCase::new(state.store.clone());

    let report = run_blocking(move || use_case.execute(&source)).await?;
    tracing::info!("[train-demo] Trained on {} samples", report.samples);

    Ok(Json(TrainResponse::ok(report.samples)))
}

/// Retrain from the CSV uploaded in multipart field `file`.
pub async fn train_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TrainResponse>, ServiceError> {
    let Ok(multipart) = multipart else {
        return Err(ServiceError::Validation(NO_FILE_UPLOADED.to_string()));
    };
    let (file_name, data) = read_upload(multipart).await?;
    tracing::info!("Received file: {} ({} bytes)", file_name, data.len());

    let source = CsvBytes::new(data, state.normalizer);
    let use_case = TrainUseCase::new(state.store.clone());

    let report = run_blocking(move || use_case.execute(&source)).await?;
    tracing::info!(
        "[train-file] Trained on {} samples from uploaded file",
        report.samples
    );

    Ok(Json(TrainResponse::ok(report.samples)))
}

/// Send the stored artifact as a file attachment.
pub async fn download_model(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let use_case = DownloadUseCase::new(state.store.clone());
    let bytes = run_blocking(move || use_case.execute()).await?;

    let disposition = format!("attachment; filename=\"{MODEL_DOWNLOAD_NAME}\"");
    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    Ok((headers, bytes).into_response())
}

// ============================================================================
// Helpers
// ============================================================================

/// Pull the `file` field out of a multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), ServiceError> {
    let invalid = |e: axum::extract::multipart::MultipartError| {
        ServiceError::Validation(format!("Invalid upload: {e}"))
    };

    while let Some(field) = multipart.next_field().await.map_err(invalid)? {
        if field.name() != Some("file") {
            continue;
        }

        // plain form values carry no file name; an empty file input sends ""
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => break,
        };

        let data = field.bytes().await.map_err(invalid)?;
        return Ok((file_name, data.to_vec()));
    }

    Err(ServiceError::Validation(NO_FILE_UPLOADED.to_string()))
}

/// Run CPU-bound or blocking work off the async reactor.
async fn run_blocking<T, F>(work: F) -> Result<T, ServiceError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .context("Background task failed")?
}
