// ============================================================
// Layer 2 - Application Configuration
// ============================================================
// Everything a deployment can tune. The CLI layer builds this
// from clap arguments (see cli::commands), so nothing below
// Layer 1 ever sees clap types.
//
// Serialisable so the effective configuration can be logged
// as JSON at startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::csv_loader::{CsvNormalizer, UnrecognizedLabelPolicy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub host: String,

    /// TCP port the HTTP server listens on
    pub port: u16,

    /// Where the single trained model artifact is kept
    pub model_path: PathBuf,

    /// The bundled demo CSV used by POST /train-demo
    pub demo_path: PathBuf,

    /// How rows with an unrecognised label are treated
    pub unrecognized_labels: UnrecognizedLabelPolicy,
}

impl AppConfig {
    pub fn normalizer(&self) -> CsvNormalizer {
        CsvNormalizer::new(self.unrecognized_labels)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host:                "127.0.0.1".to_string(),
            port:                5000,
            model_path:          PathBuf::from("model.json"),
            demo_path:           PathBuf::from("data/demo_dataset.csv"),
            unrecognized_labels: UnrecognizedLabelPolicy::Ham,
        }
    }
}
