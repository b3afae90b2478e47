// ============================================================
// Layer 3 - Sample and Dataset Domain Types
// ============================================================
// A Sample is one (text, label) pair read from a CSV row.
// A Dataset is the ordered, non-empty list of samples that
// came from a single CSV source.
//
// The label is binary: Spam is 1 and Ham is 0. Variant order
// matters because Ord is derived, so Ham sorts before Spam.
//
// Reference: Rust Book §5 (Structs), §6 (Enums and Pattern Matching)

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two classes the classifier can assign to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    /// Numeric form of the label: 1 for spam, 0 for ham.
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }

    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }
}

/// Display gives the capitalised form returned by the prediction API.
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => f.write_str("Ham"),
            Label::Spam => f.write_str("Spam"),
        }
    }
}

/// One labelled training message.
/// The text is always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub text: String,
    pub label: Label,
}

impl Sample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// An ordered collection of samples from one CSV source.
///
/// Constructed only through `Dataset::new`, which refuses an
/// empty list, so every Dataset in the program holds at least
/// one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Wrap a list of samples. Returns None if the list is empty.
    pub fn new(samples: Vec<Sample>) -> Option<Self> {
        if samples.is_empty() {
            None
        } else {
            Some(Self { samples })
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The message texts, in row order.
    pub fn texts(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.text.as_str()).collect()
    }

    /// The labels, in row order, parallel to `texts()`.
    pub fn labels(&self) -> Vec<Label> {
        self.samples.iter().map(|s| s.label).collect()
    }

    /// Number of samples labelled spam.
    pub fn spam_count(&self) -> usize {
        self.samples.iter().filter(|s| s.label.is_spam()).count()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_numeric_values() {
        assert_eq!(Label::Spam.as_u8(), 1);
        assert_eq!(Label::Ham.as_u8(), 0);
        assert!(Label::Ham < Label::Spam);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Spam.to_string(), "Spam");
        assert_eq!(Label::Ham.to_string(), "Ham");
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(Dataset::new(Vec::new()).is_none());
    }

    #[test]
    fn test_parallel_views() {
        let ds = Dataset::new(vec![
            Sample::new("win money", Label::Spam),
            Sample::new("see you at lunch", Label::Ham),
        ])
        .unwrap();

        assert_eq!(ds.texts(), vec!["win money", "see you at lunch"]);
        assert_eq!(ds.labels(), vec![Label::Spam, Label::Ham]);
        assert_eq!(ds.spam_count(), 1);
    }
}
