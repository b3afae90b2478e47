// ============================================================
// Layer 2 - TrainUseCase
// ============================================================
// Orchestrates one training run, in order:
//
//   Step 1: Load and normalise the CSV   (Layer 4 - data)
//   Step 2: Fit TF-IDF + Naive Bayes     (Layer 5 - ml)
//   Step 3: Replace the stored model     (Layer 6 - infra)
//
// Every run trains from scratch and fully overwrites the
// previous model. Nothing is merged.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::error::ServiceError;
use crate::domain::traits::DatasetSource;
use crate::infra::model_store::ModelStore;
use crate::ml::trainer::train_model;

/// What a successful training run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainReport {
    /// Samples the model was fitted on
    pub samples: usize,

    /// How many of those were spam
    pub spam_samples: usize,

    /// Distinct terms in the learned vocabulary
    pub vocabulary_size: usize,
}

pub struct TrainUseCase {
    store: Arc<dyn ModelStore>,
}

impl TrainUseCase {
    pub fn new(store: Arc<dyn ModelStore>) -> Self {
        Self { store }
    }

    /// Run the full training pipeline on one dataset source.
    pub fn execute(&self, source: &dyn DatasetSource) -> Result<TrainReport, ServiceError> {
        // ── Step 1: Load + normalise ──────────────────────────────────────────
        let dataset = source.load_dataset()?;
        tracing::info!(
            "Loaded {} samples ({} spam)",
            dataset.len(),
            dataset.spam_count()
        );

        // ── Step 2: Fit ───────────────────────────────────────────────────────
        let model = train_model(&dataset)?;

        // ── Step 3: Persist ───────────────────────────────────────────────────
        self.store.save(&model)?;

        Ok(TrainReport {
            samples:         dataset.len(),
            spam_samples:    dataset.spam_count(),
            vocabulary_size: model.vectorizer().n_features(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::csv_loader::{CsvBytes, CsvNormalizer};
    use crate::infra::model_store::FileModelStore;

    fn store_in(dir: &tempfile::TempDir) -> Arc<FileModelStore> {
        Arc::new(FileModelStore::new(dir.path().join("model.json")))
    }

    #[test]
    fn test_trains_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let use_case = TrainUseCase::new(store.clone());

        let csv = "label,text\nspam,win money now\nham,meeting at noon\nham,\n";
        let report = use_case
            .execute(&CsvBytes::new(csv, CsvNormalizer::default()))
            .unwrap();

        assert_eq!(report.samples, 2);
        assert_eq!(report.spam_samples, 1);
        assert_eq!(report.vocabulary_size, 6);
        assert!(store.exists());
    }

    #[test]
    fn test_bad_csv_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let use_case = TrainUseCase::new(store.clone());

        let err = use_case
            .execute(&CsvBytes::new("foo,bar\n1,2\n", CsvNormalizer::default()))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(!store.exists());
    }

    #[test]
    fn test_wordless_dataset_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = TrainUseCase::new(store_in(&dir));

        let err = use_case
            .execute(&CsvBytes::new("label,text\nspam,!!\n", CsvNormalizer::default()))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
