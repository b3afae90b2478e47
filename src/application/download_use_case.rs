// ============================================================
// Layer 2 - DownloadUseCase
// ============================================================
// Hands out the stored artifact byte-for-byte, so a downloaded
// model can be loaded elsewhere exactly as the server sees it.

use std::sync::Arc;

use crate::domain::error::ServiceError;
use crate::infra::model_store::ModelStore;

/// File name offered to the browser for the artifact.
pub const MODEL_DOWNLOAD_NAME: &str = "model.json";

pub struct DownloadUseCase {
    store: Arc<dyn ModelStore>,
}

impl DownloadUseCase {
    pub fn new(store: Arc<dyn ModelStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<Vec<u8>, ServiceError> {
        self.store.raw_bytes()?.ok_or(ServiceError::ModelMissing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::model_store::FileModelStore;

    #[test]
    fn test_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileModelStore::new(dir.path().join("model.json")));
        let err = DownloadUseCase::new(store).execute().unwrap_err();
        assert_eq!(err.to_string(), "Model not trained yet.");
    }
}
