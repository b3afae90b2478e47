// ============================================================
// Layer 5 - Spam Model Artifact
// ============================================================
// The unit that gets trained, persisted, downloaded, and loaded
// for prediction: a fitted TF-IDF vectorizer plus a fitted
// Naive Bayes classifier.
//
// Wire format is pretty-printed JSON:
//
//   {
//     "format_version": 1,
//     "vectorizer": { "vocabulary": {...}, "idf": [...] },
//     "classifier": { "alpha": 1.0, "classes": [...],
//                     "class_log_prior": [...],
//                     "feature_log_prob": [[...], [...]] }
//   }
//
// serde_json is built with `float_roundtrip`, so every f64 parses
// back to the same bits and a saved model compares equal to the
// one that was trained.
//
// Decoding also checks that the parts fit together (indices in
// range, one row per class, one column per feature). A model that
// passes never indexes out of bounds while predicting.

use serde::{Deserialize, Serialize};

use crate::domain::sample::Label;
use crate::ml::error::ModelError;
use crate::ml::naive_bayes::MultinomialNb;
use crate::ml::vectorizer::TfidfVectorizer;

/// Bumped whenever the JSON layout changes incompatibly.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamModel {
    format_version: u32,
    vectorizer:     TfidfVectorizer,
    classifier:     MultinomialNb,
}

impl SpamModel {
    pub fn new(vectorizer: TfidfVectorizer, classifier: MultinomialNb) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            vectorizer,
            classifier,
        }
    }

    /// Vectorize a message with the learned vocabulary and classify it.
    pub fn predict(&self, text: &str) -> Label {
        let x = self.vectorizer.transform(text);
        self.classifier.predict(&x)
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }

    /// Encode as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }

    /// Decode from JSON, refusing artifacts written in another format version
    /// or whose vectorizer and classifier disagree on shape.
    pub fn from_json(bytes: &[u8]) -> anyhow::Result<Self> {
        let model: SpamModel = serde_json::from_slice(bytes)?;
        if model.format_version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedFormat(model.format_version).into());
        }
        model.vectorizer.check_consistency()?;
        model.classifier.check_consistency(model.vectorizer.n_features())?;
        Ok(model)
    }
}
