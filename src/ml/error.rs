use thiserror::Error;

/// Failures while fitting or decoding a model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Cannot train on an empty dataset.")]
    EmptyTrainingSet,

    /// No training text contained a single token.
    #[error("Empty vocabulary: the training texts contain no words.")]
    EmptyVocabulary,

    #[error("Got {features} feature rows but {labels} labels.")]
    LengthMismatch { features: usize, labels: usize },

    #[error("Unsupported model format version {0}.")]
    UnsupportedFormat(u32),

    /// A decoded artifact whose parts do not fit together.
    #[error("Inconsistent model: {0}")]
    Inconsistent(String),
}

impl ModelError {
    /// True when the error comes from the caller's data rather than the system.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ModelError::EmptyTrainingSet | ModelError::EmptyVocabulary)
    }
}
