//! Error types for EV metadata harmonization

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for evmeta-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while locating, reading or harmonizing the dataset
#[derive(Debug, Error)]
pub enum Error {
    /// No dataset file exists at any of the known locations
    #[error("Parquet dataset not found; searched: {}", display_paths(.searched))]
    DatasetNotFound {
        /// Candidate paths that were checked, in order
        searched: Vec<PathBuf>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parquet decoding error
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Arrow conversion error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// A synonym list could not be compiled into a matcher
    #[error("Invalid synonym pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(no candidate paths)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_not_found_lists_paths() {
        let err = Error::DatasetNotFound {
            searched: vec![PathBuf::from("/a/x.parquet"), PathBuf::from("/b/x.parquet")],
        };
        assert_eq!(
            err.to_string(),
            "Parquet dataset not found; searched: /a/x.parquet, /b/x.parquet"
        );
    }

    #[test]
    fn test_dataset_not_found_without_candidates() {
        let err = Error::DatasetNotFound { searched: vec![] };
        assert!(err.to_string().ends_with("(no candidate paths)"));
    }
}
