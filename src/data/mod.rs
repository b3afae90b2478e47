// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Turns raw CSV bytes into something the model can learn from.
//
//   CSV bytes (upload or demo file)
//       │
//       ▼
//   CsvNormalizer     → detects columns, trims text, maps labels
//       │
//       ▼
//   Dataset           → ordered (text, label) samples
//       │
//       ▼
//   tokenizer         → lowercase word tokens for the vectorizer
//
// Reference: csv crate documentation
//            Rust Book §8 (Strings in Rust)

/// CSV parsing, column detection, and label normalisation
pub mod csv_loader;

/// Splits message text into lowercase word tokens
pub mod tokenizer;
