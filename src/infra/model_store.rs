// ============================================================
// Layer 6 - Model Store
// ============================================================
// Persists the single SpamModel artifact of a deployment.
//
// What is on disk:
//   <model_path>            - the JSON artifact (see ml::model)
//   <model_dir>/.tmpXXXXXX  - short-lived, only during a save
//
// Saving writes the whole artifact to a temp file in the same
// directory, flushes it, then renames it over the old one.
// Rename within one directory is atomic, so a reader sees
// either the previous model or the new one, never half of one.
//
// On top of that an in-process RwLock orders saves against
// loads and downloads: many readers at once, one writer.
// The last save wins.
//
// Reference: tempfile crate documentation (NamedTempFile::persist)
//            Rust Book §16 (Shared-State Concurrency)

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use parking_lot::RwLock;
use tempfile::NamedTempFile;

use crate::ml::model::SpamModel;

// ─── ModelStore ───────────────────────────────────────────────────────────────
/// Storage for the one trained model of a deployment.
///
/// Implementations:
///   - FileModelStore → a JSON file on local disk
pub trait ModelStore: Send + Sync {
    /// Replace the stored model.
    fn save(&self, model: &SpamModel) -> Result<()>;

    /// The stored model, or None if nothing has been trained yet.
    fn load(&self) -> Result<Option<SpamModel>>;

    fn exists(&self) -> bool;

    /// The artifact exactly as stored, for download.
    fn raw_bytes(&self) -> Result<Option<Vec<u8>>>;
}

// ─── FileModelStore ───────────────────────────────────────────────────────────
pub struct FileModelStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the artifact lives in; "." for a bare file name.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    /// Read the artifact file; Ok(None) if it does not exist.
    /// Caller must hold the lock.
    fn read_file(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| {
                format!("Cannot read model from '{}'", self.path.display())
            }),
        }
    }
}

impl ModelStore for FileModelStore {
    fn save(&self, model: &SpamModel) -> Result<()> {
        let bytes = model.to_json().context("Cannot serialise model")?;

        let _guard = self.lock.write();

        let dir = self.dir();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create model directory '{}'", dir.display()))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Cannot create temp file in '{}'", dir.display()))?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Cannot write model to '{}'", self.path.display()))?;

        tracing::debug!("Saved model ({} bytes) to '{}'", bytes.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<SpamModel>> {
        let _guard = self.lock.read();

        let Some(bytes) = self.read_file()? else {
            return Ok(None);
        };

        let model = SpamModel::from_json(&bytes).with_context(|| {
            format!("Model file '{}' is corrupted", self.path.display())
        })?;
        tracing::debug!("Loaded model from '{}'", self.path.display());
        Ok(Some(model))
    }

    fn exists(&self) -> bool {
        let _guard = self.lock.read();
        self.path.is_file()
    }

    fn raw_bytes(&self) -> Result<Option<Vec<u8>>> {
        let _guard = self.lock.read();
        self.read_file()
    }
}
