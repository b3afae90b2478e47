// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing what the
// system works with: labelled samples, datasets, and the
// errors a request can end in.
//
// Rules for this layer:
//   - NO axum or HTTP types
//   - NO file I/O
//   - NO TF-IDF or Naive Bayes math
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Spam/Ham labels, samples, and datasets
pub mod sample;

// Typed errors shared by the use cases and the HTTP layer
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
