// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one
// business layer:
//
//   model_store.rs - Saving and loading the trained model.
//                    A ModelStore trait the use cases depend
//                    on, and a FileModelStore that keeps one
//                    JSON artifact on disk and publishes new
//                    versions by atomic rename.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model artifact persistence
pub mod model_store;
