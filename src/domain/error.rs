// ============================================================
// Layer 3 - Domain Errors
// ============================================================
// Two error enums, both derived with thiserror:
//
//   DatasetError - everything the CSV normaliser can reject
//   ServiceError - what a train/predict/download request ends in
//
// The messages are user facing: the HTTP layer returns them
// verbatim inside {"error": ...}.

use thiserror::Error;

/// Reasons a CSV source cannot be turned into a Dataset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("CSV file is empty or has no rows.")]
    Empty,

    #[error("CSV must have a 'text' or 'message' column.")]
    MissingTextColumn,

    #[error("CSV must have a 'label' or 'category' column.")]
    MissingLabelColumn,

    #[error("No valid rows found in CSV.")]
    NoValidRows,

    #[error("Malformed CSV: {0}")]
    Malformed(String),
}

impl DatasetError {
    /// True for the two "missing column" variants.
    pub fn is_missing_column(&self) -> bool {
        matches!(
            self,
            DatasetError::MissingTextColumn | DatasetError::MissingLabelColumn
        )
    }
}

/// The error taxonomy seen by callers of the use cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Bad caller input: empty message, missing upload, bad CSV.
    #[error("{0}")]
    Validation(String),

    /// Prediction requested before any model was trained.
    #[error("Model not trained yet. Please use 'Train Demo Data' or 'Train on file' first.")]
    NotReady,

    /// Download requested before any model was trained.
    #[error("Model not trained yet.")]
    ModelMissing,

    /// The bundled demo CSV is not present on this deployment.
    #[error("Demo dataset not found on server.")]
    DemoDatasetMissing,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<DatasetError> for ServiceError {
    fn from(e: DatasetError) -> Self {
        ServiceError::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_error_becomes_validation() {
        let err: ServiceError = DatasetError::NoValidRows.into();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "No valid rows found in CSV.");
    }

    #[test]
    fn test_missing_column_classification() {
        assert!(DatasetError::MissingTextColumn.is_missing_column());
        assert!(DatasetError::MissingLabelColumn.is_missing_column());
        assert!(!DatasetError::Empty.is_missing_column());
    }
}
