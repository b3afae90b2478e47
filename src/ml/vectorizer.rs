// ============================================================
// Layer 5 - TF-IDF Vectorizer
// ============================================================
// Maps a message to a sparse feature vector.
//
// Fitting (once per training run):
//   1. Tokenize every training text
//   2. Vocabulary = every distinct token, indexed in sorted order
//   3. df(t)  = number of texts containing token t
//      idf(t) = ln((1 + n) / (1 + df(t))) + 1
//
//   The "+1" inside the fraction acts as if one extra document
//   contained every term, so no idf ever divides by zero. The
//   "+1" outside keeps terms that appear everywhere from being
//   ignored entirely.
//
// Transforming (training texts and every prediction):
//   1. Count each in-vocabulary token; unknown tokens are dropped
//   2. Multiply each count by its idf weight
//   3. Divide by the L2 norm so long and short messages are
//      on the same scale
//
// Vectors are sparse: a list of (feature index, weight) pairs
// sorted by index. An SMS touches a handful of features out
// of thousands, so dense vectors would be mostly zeros.
//
// Reference: Manning et al. (2008) §6.2 (tf-idf weighting)

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::data::tokenizer::tokenize;
use crate::ml::error::ModelError;

/// (feature index, weight) pairs, sorted by feature index.
pub type SparseVector = Vec<(usize, f64)>;

/// Fitted TF-IDF state: the vocabulary and one idf weight per term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// token → feature index
    vocabulary: BTreeMap<String, usize>,

    /// idf weight, indexed by feature index
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and idf weights from training texts.
    pub fn fit<S: AsRef<str>>(texts: &[S]) -> Result<Self, ModelError> {
        if texts.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        // Document frequency of every token
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for text in texts {
            let unique: BTreeSet<String> = tokenize(text.as_ref()).into_iter().collect();
            for token in unique {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(ModelError::EmptyVocabulary);
        }

        // BTreeMap iterates in sorted order, which fixes the feature indices
        let n_docs = texts.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());

        for (index, (token, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(token, index);
        }

        tracing::debug!("Fitted TF-IDF vocabulary of {} terms", vocabulary.len());
        Ok(Self { vocabulary, idf })
    }

    /// Fit on the training texts and return their vectors in the same order.
    pub fn fit_transform<S: AsRef<str>>(
        texts: &[S],
    ) -> Result<(Self, Vec<SparseVector>), ModelError> {
        let vectorizer = Self::fit(texts)?;
        let vectors = texts.iter().map(|t| vectorizer.transform(t.as_ref())).collect();
        Ok((vectorizer, vectors))
    }

    /// Map one text into the learned feature space.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();
        vector.sort_by_key(|&(index, _)| index);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut vector {
                *w /= norm;
            }
        }

        vector
    }

    /// Number of features (distinct vocabulary terms).
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Every vocabulary index must address an idf weight.
    pub fn check_consistency(&self) -> Result<(), ModelError> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(ModelError::Inconsistent(format!(
                "{} vocabulary terms but {} idf weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if let Some((token, &index)) = self.vocabulary.iter().find(|&(_, &i)| i >= self.idf.len()) {
            return Err(ModelError::Inconsistent(format!(
                "term '{token}' has index {index}, out of range for {} features",
                self.idf.len()
            )));
        }
        Ok(())
    }

    /// The idf weight of a term, if the term is in the vocabulary.
    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }
}
