//! Structured error responses

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type (e.g., "dataset_unavailable", "dataset_read", "unknown_term")
    pub error_type: String,
    /// Human-readable error message
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, error_type: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error_type: error_type.to_string(),
            message: message.into(),
        }),
    )
}

/// Map library errors to HTTP status codes and structured responses.
///
/// Details such as filesystem paths are logged, not returned to clients.
pub fn map_core_error(e: evmeta_core::Error) -> ApiError {
    match e {
        evmeta_core::Error::DatasetNotFound { .. } => {
            tracing::warn!("Dataset unavailable: {}", e);
            api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "dataset_unavailable",
                "Dataset is not available",
            )
        }
        _ => {
            tracing::error!("Failed to read dataset: {}", e);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "dataset_read",
                "Failed to read dataset",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_503() {
        let (status, Json(body)) = map_core_error(evmeta_core::Error::DatasetNotFound {
            searched: vec!["/srv/private/ev.parquet".into()],
        });
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.error_type, "dataset_unavailable");
        assert!(!body.message.contains("/srv/private"));
    }

    #[test]
    fn test_io_maps_to_500() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let (status, Json(body)) = map_core_error(evmeta_core::Error::Io(io));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error_type, "dataset_read");
        assert!(!body.message.contains("denied"));
    }
}
