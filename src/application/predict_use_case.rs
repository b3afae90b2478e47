// ============================================================
// Layer 2 - PredictUseCase
// ============================================================
// Classifies one message:
//
//   1. Reject empty / whitespace-only input
//   2. Load the stored model (fresh from the store every call,
//      so a retrain is picked up by the very next request)
//   3. Vectorize with the learned vocabulary and classify
//
// Words the model never saw during training carry no weight.

use std::sync::Arc;

use crate::domain::error::ServiceError;
use crate::domain::sample::Label;
use crate::domain::traits::MessageClassifier;
use crate::infra::model_store::ModelStore;

pub const EMPTY_MESSAGE: &str = "Message is empty";

/// Trim a raw message and refuse it if nothing is left.
pub fn validate_message(raw: &str) -> Result<&str, ServiceError> {
    let text = raw.trim();
    if text.is_empty() {
        Err(ServiceError::Validation(EMPTY_MESSAGE.to_string()))
    } else {
        Ok(text)
    }
}

pub struct PredictUseCase {
    store: Arc<dyn ModelStore>,
}

impl PredictUseCase {
    pub fn new(store: Arc<dyn ModelStore>) -> Self {
        Self { store }
    }

    /// Validate a raw message, then classify it.
    pub fn predict(&self, raw: &str) -> Result<Label, ServiceError> {
        let text = validate_message(raw)?;
        self.classify(text)
    }
}

impl MessageClassifier for PredictUseCase {
    fn classify(&self, text: &str) -> Result<Label, ServiceError> {
        let model = self.store.load()?.ok_or(ServiceError::NotReady)?;
        let label = model.predict(text);

        tracing::info!("Predicted {} for {:?}", label, text);
        Ok(label)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::train_use_case::TrainUseCase;
    use crate::data::csv_loader::{CsvBytes, CsvNormalizer};
    use crate::infra::model_store::FileModelStore;

    #[test]
    fn test_validate_message() {
        assert_eq!(validate_message("  hi there \n").unwrap(), "hi there");
        let err = validate_message(" \t ").unwrap_err();
        assert_eq!(err.to_string(), EMPTY_MESSAGE);
    }

    #[test]
    fn test_untrained_is_not_ready() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileModelStore::new(dir.path().join("model.json")));
        let err = PredictUseCase::new(store).predict("hello").unwrap_err();
        assert!(matches!(err, ServiceError::NotReady));
    }

    #[test]
    fn test_picks_up_retrained_model() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileModelStore::new(dir.path().join("model.json")));
        let trainer = TrainUseCase::new(store.clone());
        let predictor = PredictUseCase::new(store);

        let first = "label,text\nspam,cheap watches\nham,dinner tonight\n";
        trainer.execute(&CsvBytes::new(first, CsvNormalizer::default())).unwrap();
        assert_eq!(predictor.predict("cheap watches").unwrap(), Label::Spam);

        // same texts, flipped labels
        let second = "label,text\nham,cheap watches\nspam,dinner tonight\n";
        trainer.execute(&CsvBytes::new(second, CsvNormalizer::default())).unwrap();
        assert_eq!(predictor.predict("cheap watches").unwrap(), Label::Ham);
    }
}
