// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer talks to these traits rather than to
// concrete types, so a training run does not care whether its
// CSV came from the bundled demo file or from an upload, and
// the HTTP layer does not care how a message gets classified.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::ServiceError;
use crate::domain::sample::{Dataset, Label};

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce a normalised Dataset.
///
/// Implementations:
///   - CsvBytes    → an uploaded CSV already held in memory
///   - DemoDataset → the CSV file bundled with the deployment
pub trait DatasetSource {
    fn load_dataset(&self) -> Result<Dataset, ServiceError>;
}

// ─── MessageClassifier ────────────────────────────────────────────────────────
/// Any component that can label a single message as spam or ham.
///
/// Implementations:
///   - PredictUseCase → loads the persisted model for every call
pub trait MessageClassifier {
    /// Classify an already-trimmed, non-empty message.
    fn classify(&self, text: &str) -> Result<Label, ServiceError>;
}
