// ============================================================
// Layer 5 - ML / Model Layer
// ============================================================
// All of the numerical code lives here. No other layer does
// any TF-IDF or Naive Bayes arithmetic.
//
// What's in this layer:
//
//   vectorizer.rs  - TF-IDF feature extraction
//                    • vocabulary learned from training texts
//                    • smoothed IDF weights
//                    • L2-normalised sparse vectors
//
//   naive_bayes.rs - Multinomial Naive Bayes classifier
//                    • Laplace smoothing (alpha = 1)
//                    • log class priors
//                    • log feature likelihoods
//
//   model.rs       - The persisted artifact: vectorizer +
//                    classifier, with a JSON wire format
//
//   trainer.rs     - Fits a model from a Dataset and reports
//                    training accuracy
//
//   error.rs       - What can go wrong while fitting/loading
//
// Reference: Manning et al. (2008) Introduction to Information
//            Retrieval, ch. 6 (tf-idf) and ch. 13 (Naive Bayes)

pub mod error;

/// TF-IDF vectorizer
pub mod vectorizer;

/// Multinomial Naive Bayes classifier
pub mod naive_bayes;

/// The vectorizer + classifier artifact
pub mod model;

/// Training entry point
pub mod trainer;
