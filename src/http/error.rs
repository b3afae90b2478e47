// ============================================================
// Layer 1 - HTTP Error Mapping
// ============================================================
// Every ServiceError leaves the server as {"error": message}
// with a status code picked by kind:
//
//   Validation, NotReady  → 400
//   ModelMissing          → 404
//   DemoDatasetMissing    → 500
//   Internal              → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::error::ServiceError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::NotReady => StatusCode::BAD_REQUEST,
            ServiceError::ModelMissing => StatusCode::NOT_FOUND,
            ServiceError::DemoDatasetMissing | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{:#}", self);
        } else {
            tracing::warn!("Rejected request ({}): {}", status.as_u16(), self);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
