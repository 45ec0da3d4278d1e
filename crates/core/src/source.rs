//! Dataset location
//!
//! The same binary runs on a developer machine and inside the container, so
//! the dataset path is detected rather than fixed: an explicit override wins,
//! then the first candidate that exists on disk.

use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// File name of the unified metadata export
pub const DATASET_FILE_NAME: &str = "unified_ev_metadata.parquet";

/// Environment variable holding an explicit dataset path
pub const PARQUET_PATH_ENV: &str = "EV_PARQUET_PATH";

/// Candidate locations checked when no override is given: local development
/// first, then the container data directory.
pub fn default_search_paths() -> Vec<PathBuf> {
    vec![
        Path::new("./data").join(DATASET_FILE_NAME),
        Path::new("/app/data").join(DATASET_FILE_NAME),
    ]
}

/// Resolves which Parquet file backs the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLocator {
    override_path: Option<PathBuf>,
    candidates: Vec<PathBuf>,
}

impl Default for DatasetLocator {
    fn default() -> Self {
        Self::new(default_search_paths())
    }
}

impl DatasetLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            override_path: None,
            candidates,
        }
    }

    /// Set an explicit path that bypasses the candidate search
    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Pick the dataset path.
    ///
    /// An override is returned as-is, even if the file does not exist; the
    /// subsequent read reports the I/O error. Without an override the first
    /// existing candidate is returned.
    pub fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = &self.override_path {
            return Ok(path.clone());
        }

        self.candidates
            .iter()
            .find(|p| p.exists())
            .cloned()
            .ok_or_else(|| Error::DatasetNotFound {
                searched: self.candidates.clone(),
            })
    }

    /// Resolve and read the dataset
    pub fn load(&self) -> Result<Dataset> {
        let path = self.resolve()?;
        tracing::debug!(path = %path.display(), "Reading dataset");
        Dataset::read_parquet(path)
    }
}
