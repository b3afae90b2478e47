// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// user-visible goal each:
//
//   train_use_case.rs    - CSV source → Dataset → model → store
//   predict_use_case.rs  - message → stored model → Spam/Ham
//   download_use_case.rs - stored model → raw artifact bytes
//
// plus config.rs, the settings every use case is built from.
//
// Rules for this layer:
//   - No TF-IDF or Naive Bayes math here
//   - No HTTP or printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination and error mapping
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

use crate::domain::error::ServiceError;
use crate::ml::error::ModelError;

// Deployment settings shared by the server and the CLI
pub mod config;

// The training workflow
pub mod train_use_case;

// The single-message classification workflow
pub mod predict_use_case;

// Serving the stored artifact
pub mod download_use_case;

/// Fitting errors caused by the caller's data are validation
/// errors; anything else is a fault on our side.
impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        if e.is_input_error() {
            ServiceError::Validation(e.to_string())
        } else {
            ServiceError::Internal(e.into())
        }
    }
}
