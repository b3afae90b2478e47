// ============================================================
// Layer 5 - Multinomial Naive Bayes
// ============================================================
// Learns, per class c:
//
//   log P(c)     = ln(count(c) / n)
//   log P(t | c) = ln((sum of feature t over class c + alpha)
//                     / (sum of all features in c + alpha * n_features))
//
// and predicts the class with the highest
//
//   log P(c) + Σ x_t · log P(t | c)
//
// Everything is kept in log space so that long messages do not
// underflow to zero probability.
//
// Only the classes present in the training labels are learned.
// A dataset that is all ham produces a model that always
// answers ham.
//
// Reference: Manning et al. (2008) §13.2 (Multinomial NB)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::sample::Label;
use crate::ml::error::ModelError;
use crate::ml::vectorizer::SparseVector;

/// Laplace smoothing, so unseen (term, class) pairs keep a small probability.
pub const DEFAULT_ALPHA: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha: f64,

    /// Learned classes in ascending order (Ham before Spam)
    classes: Vec<Label>,

    /// ln P(class), parallel to `classes`
    class_log_prior: Vec<f64>,

    /// ln P(feature | class): one row per class, one column per feature
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit the classifier on feature vectors and their labels.
    pub fn fit(
        features:   &[SparseVector],
        labels:     &[Label],
        n_features: usize,
        alpha:      f64,
    ) -> Result<Self, ModelError> {
        if features.len() != labels.len() {
            return Err(ModelError::LengthMismatch {
                features: features.len(),
                labels:   labels.len(),
            });
        }
        if labels.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let classes: Vec<Label> = labels
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let n_samples = labels.len() as f64;

        let mut class_log_prior  = Vec::with_capacity(classes.len());
        let mut feature_log_prob = Vec::with_capacity(classes.len());

        for &class in &classes {
            let mut feature_sums = vec![0.0f64; n_features];
            let mut class_count  = 0usize;

            for (x, _) in features.iter().zip(labels).filter(|&(_, &l)| l == class) {
                class_count += 1;
                for &(index, weight) in x {
                    feature_sums[index] += weight;
                }
            }

            let denominator = feature_sums.iter().sum::<f64>() + alpha * n_features as f64;

            class_log_prior.push((class_count as f64 / n_samples).ln());
            feature_log_prob.push(
                feature_sums
                    .iter()
                    .map(|s| ((s + alpha) / denominator).ln())
                    .collect(),
            );
        }

        Ok(Self { alpha, classes, class_log_prior, feature_log_prob })
    }

    /// Unnormalised log posterior for each learned class.
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior + x.iter().map(|&(i, w)| w * log_probs[i]).sum::<f64>()
            })
            .collect()
    }

    /// The most likely class; ties go to the lower label.
    pub fn predict(&self, x: &SparseVector) -> Label {
        let scores = self.joint_log_likelihood(x);

        let mut best = 0usize;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = i;
            }
        }
        self.classes[best]
    }

    /// Shape check for a decoded classifier: at least one class, one prior
    /// and one likelihood row per class, `n_features` columns per row.
    pub fn check_consistency(&self, n_features: usize) -> Result<(), ModelError> {
        if self.classes.is_empty() {
            return Err(ModelError::Inconsistent("no classes".into()));
        }
        if self.class_log_prior.len() != self.classes.len()
            || self.feature_log_prob.len() != self.classes.len()
        {
            return Err(ModelError::Inconsistent(format!(
                "{} classes, {} priors, {} likelihood rows",
                self.classes.len(),
                self.class_log_prior.len(),
                self.feature_log_prob.len()
            )));
        }
        if let Some(row) = self.feature_log_prob.iter().find(|row| row.len() != n_features) {
            return Err(ModelError::Inconsistent(format!(
                "likelihood row has {} columns, expected {n_features}",
                row.len()
            )));
        }
        Ok(())
    }

    pub fn classes(&self) -> &[Label] {
        &self.classes
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob.first().map_or(0, Vec::len)
    }
}
