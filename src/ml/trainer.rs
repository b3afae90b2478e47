// ============================================================
// Layer 5 - Trainer
// ============================================================
// Fits a SpamModel from a Dataset:
//
//   Step 1: Fit TF-IDF on the texts and vectorize them
//   Step 2: Fit Naive Bayes on the vectors and labels
//   Step 3: Score the training set and log the accuracy
//
// Training is a single closed-form pass (counting and logs),
// so there are no epochs or learning rates.

use crate::domain::sample::Dataset;
use crate::ml::error::ModelError;
use crate::ml::model::SpamModel;
use crate::ml::naive_bayes::{MultinomialNb, DEFAULT_ALPHA};
use crate::ml::vectorizer::TfidfVectorizer;

pub fn train_model(dataset: &Dataset) -> Result<SpamModel, ModelError> {
    let texts  = dataset.texts();
    let labels = dataset.labels();

    let (vectorizer, features) = TfidfVectorizer::fit_transform(&texts)?;
    let classifier = MultinomialNb::fit(&features, &labels, vectorizer.n_features(), DEFAULT_ALPHA)?;

    let model = SpamModel::new(vectorizer, classifier);

    tracing::info!(
        "Trained on {} samples ({} spam), vocabulary={} terms, train_acc={:.1}%",
        dataset.len(),
        dataset.spam_count(),
        model.vectorizer().n_features(),
        accuracy(&model, dataset) * 100.0,
    );

    Ok(model)
}

/// Fraction of samples in `dataset` the model labels correctly.
pub fn accuracy(model: &SpamModel, dataset: &Dataset) -> f64 {
    let correct = dataset
        .samples()
        .iter()
        .filter(|s| model.predict(&s.text) == s.label)
        .count();
    correct as f64 / dataset.len().max(1) as f64
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::{Label, Sample};

    fn separable() -> Dataset {
        Dataset::new(vec![
            Sample::new("WINNER! Claim your free prize now", Label::Spam),
            Sample::new("Free entry to win cash, text WIN now", Label::Spam),
            Sample::new("Urgent: your prize is waiting, click now", Label::Spam),
            Sample::new("Are we still meeting for lunch today?", Label::Ham),
            Sample::new("I'll call you when I get home", Label::Ham),
            Sample::new("Can you send me the notes from class", Label::Ham),
        ])
        .unwrap()
    }

    #[test]
    fn test_recalls_training_examples() {
        let ds = separable();
        let model = train_model(&ds).unwrap();
        for sample in ds.samples() {
            assert_eq!(model.predict(&sample.text), sample.label, "{}", sample.text);
        }
        assert!((accuracy(&model, &ds) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_generalises_to_new_spam() {
        let model = train_model(&separable()).unwrap();
        assert_eq!(model.predict("free prize winner click now"), Label::Spam);
        assert_eq!(model.predict("see you at lunch"), Label::Ham);
    }

    #[test]
    fn test_no_words_is_an_input_error() {
        let ds = Dataset::new(vec![Sample::new("!!!", Label::Spam)]).unwrap();
        let err = train_model(&ds).unwrap_err();
        assert_eq!(err, ModelError::EmptyVocabulary);
        assert!(err.is_input_error());
    }
}
